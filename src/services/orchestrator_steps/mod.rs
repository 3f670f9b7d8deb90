pub mod flow_steps;

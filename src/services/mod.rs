pub mod agent_service;
pub mod document_service;
pub mod learning_service;
pub mod model_service;
pub mod orchestrator_steps;
pub mod pdf_text_service;
pub mod quiz_evaluation_service;
pub mod step_executor;
pub mod study_flow_service;

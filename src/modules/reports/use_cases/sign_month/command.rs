use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SignMonth {
    pub worker_id: String,
    pub company_id: String,
    pub year: i32,
    pub month: u32,
}

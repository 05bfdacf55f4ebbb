use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Serialize, Clone)]
pub struct AppendReport {
    pub path: String,
    pub reps: u64,
    pub bytes_appended: u64,
    pub status: String,
}

impl AppendReport {
    pub fn not_found(path: &Path, reps: u64) -> Self {
        Self {
            path: path.display().to_string(),
            reps,
            bytes_appended: 0,
            status: "not_found".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct PlanItem {
    pub preset: String,
    pub file: String,
    pub reps: u64,
    pub bytes: u64,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub path: String,
    pub runs: u64,
    pub blocks: u64,
    pub sequential: bool,
    pub bytes: u64,
}

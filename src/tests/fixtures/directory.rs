use crate::shared::core::directory::{Company, PauseKind, PauseType, Worker};
use crate::shared::infrastructure::directory::in_memory::InMemoryDirectory;

pub fn company(id: &str, name: &str) -> Company {
    Company {
        id: id.into(),
        name: name.into(),
        deleted: false,
    }
}

pub fn worker(id: &str, first_name: &str, last_name: &str, company_ids: &[&str]) -> Worker {
    let id_number = match id {
        "w-1" => "12345678Z",
        "w-2" => "87654321X",
        _ => "11223344B",
    };
    Worker {
        id: id.into(),
        first_name: first_name.into(),
        last_name: last_name.into(),
        id_number: id_number.into(),
        company_ids: company_ids.iter().map(|c| c.to_string()).collect(),
        deleted: false,
    }
}

pub fn pause_type(id: &str, name: &str, kind: PauseKind, company_ids: &[&str]) -> PauseType {
    PauseType {
        id: id.into(),
        name: name.into(),
        kind,
        company_ids: company_ids.iter().map(|c| c.to_string()).collect(),
        description: None,
        deleted: false,
    }
}

/// Two companies. Ana and Luis work for Acme, Eva for Beta.
pub fn seeded_directory() -> InMemoryDirectory {
    InMemoryDirectory::new()
        .with_company(company("c-1", "Acme SL"))
        .with_company(company("c-2", "Beta SL"))
        .with_worker(worker("w-1", "Ana", "García", &["c-1"]))
        .with_worker(worker("w-2", "Luis", "Pérez", &["c-1"]))
        .with_worker(worker("w-3", "Eva", "Ruiz", &["c-2"]))
        .with_pause_type(pause_type("pt-lunch", "Lunch", PauseKind::OutsideShift, &["c-1"]))
        .with_pause_type(pause_type("pt-coffee", "Coffee", PauseKind::InsideShift, &["c-1"]))
        .with_pause_type(pause_type("pt-other", "Errand", PauseKind::OutsideShift, &["c-2"]))
}

pub mod harmony;
pub mod voicing;

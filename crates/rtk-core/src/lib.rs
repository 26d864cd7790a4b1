pub mod romaji;
pub mod settings;

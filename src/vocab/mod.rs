pub mod extract;
pub mod glossary;

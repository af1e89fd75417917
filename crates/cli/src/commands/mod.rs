pub(crate) mod materia;
pub(crate) mod search;
pub(crate) mod table;

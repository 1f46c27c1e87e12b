pub(crate) mod color;
pub(crate) mod contrast;
pub(crate) mod fonts;

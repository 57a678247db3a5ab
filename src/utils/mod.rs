pub(crate) mod text_manipulation;

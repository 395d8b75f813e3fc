pub mod request;
pub mod result;
pub mod subject;
pub mod test_type;

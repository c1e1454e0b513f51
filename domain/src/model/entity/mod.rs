pub mod request;

pub use self::request::SubmitRequest;

mod phonenumber_engine;

pub use phonenumber_engine::LibPhoneNumberEngine;

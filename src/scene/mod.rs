pub(crate) mod bank_locker;
pub(crate) mod brace;
pub(crate) mod object;
pub(crate) mod script;

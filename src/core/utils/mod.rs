#[macro_use]
mod safety;
#[macro_use]
mod logging;

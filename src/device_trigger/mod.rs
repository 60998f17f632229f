pub mod impl_channel;
pub mod impl_stdin;
pub mod interface;

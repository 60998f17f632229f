pub mod impl_fake;
pub mod impl_snapshot_file;
pub mod interface;

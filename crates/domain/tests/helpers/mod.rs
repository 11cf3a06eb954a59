pub mod builders;

pub use builders::PacketBuilder;

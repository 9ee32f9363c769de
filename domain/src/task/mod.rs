//! Task domain module

pub mod entities;
pub mod template;

pub use entities::TaskDescriptor;
pub use template::InstructionTemplate;

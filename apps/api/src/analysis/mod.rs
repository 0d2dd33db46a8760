// Job analysis: resume skills vs. skill-like entities in a posting.

pub mod handlers;
pub mod skills;

// Service exports
pub mod content;
pub mod supabase;

pub use content::{ContentStore, ContentError};
pub use supabase::{SupabaseClient, SupabaseTables, SupabaseError};

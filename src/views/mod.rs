// Client-side view logic, modeled as pure state machines.
// Transitions return the request the caller must dispatch; no I/O here.

pub mod admin_list;
pub mod profile;
pub mod register;

pub use admin_list::{AdminListView, EditingRow, PendingToggle, ToggleOutcome, PAGE_SIZE};
pub use profile::{ProfileDraft, ProfileMode, ProfileView};
pub use register::RegistrationForm;

/*!
 * Session management module for upload/translate interactions.
 *
 * This module provides:
 * - Session creation on upload
 * - Lookup for the translate and download actions
 * - Idle-session pruning
 *
 * Sessions stand in for the state a reactive UI framework would hold
 * implicitly between events. They live in process memory only and vanish
 * on restart.
 */

pub mod manager;
pub mod models;

// Re-export main types
pub use manager::SessionManager;
pub use models::Session;

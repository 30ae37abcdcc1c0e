/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc なので clone は安い)
 */
use std::sync::Arc;

use crate::services::session::SessionGate;

#[derive(Clone, Debug)]
pub struct AppState {
    pub session_gate: Arc<SessionGate>,
}

impl AppState {
    pub fn new(session_gate: Arc<SessionGate>) -> Self {
        Self { session_gate }
    }
}

use chrono::{DateTime, Datelike, Utc};

use crate::error::{GiError, Result};
use crate::models::Session;

/// In-memory session history.
pub struct SessionManager {
    /// Sessions in insertion order.
    sessions: Vec<Session>,
}

impl SessionManager {
    pub fn new(sessions: Vec<Session>) -> Self {
        Self { sessions }
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Session> {
        self.sessions.iter_mut().find(|s| s.id == id)
    }

    /// Add a session. Ids must be unique.
    pub fn add(&mut self, session: Session) -> Result<()> {
        if self.get(&session.id).is_some() {
            return Err(GiError::DuplicateSession(session.id));
        }
        self.sessions.push(session);
        Ok(())
    }

    /// First free id of the form `s<n>`.
    pub fn next_id(&self) -> String {
        (self.sessions.len() + 1..)
            .map(|n| format!("s{}", n))
            .find(|id| self.get(id).is_none())
            .unwrap_or_default()
    }

    /// Resolve an explicit id, or fall back to the most recent active session.
    pub fn resolve(&self, id: Option<&str>) -> Result<&Session> {
        match id {
            Some(id) => self
                .get(id)
                .ok_or_else(|| GiError::SessionNotFound(id.to_string())),
            None => self
                .latest_active()
                .ok_or_else(|| GiError::SessionNotFound("no active session".to_string())),
        }
    }

    /// Mutable counterpart of [`SessionManager::resolve`].
    pub fn resolve_mut(&mut self, id: Option<&str>) -> Result<&mut Session> {
        let id = self.resolve(id)?.id.clone();
        self.get_mut(&id)
            .ok_or_else(|| GiError::SessionNotFound(id.clone()))
    }

    /// Most recently started session that is not completed.
    pub fn latest_active(&self) -> Option<&Session> {
        self.sessions
            .iter()
            .filter(|s| !s.completed)
            .max_by_key(|s| s.started_at)
    }

    pub fn complete(&mut self, id: &str) -> Result<()> {
        let session = self
            .get_mut(id)
            .ok_or_else(|| GiError::SessionNotFound(id.to_string()))?;
        session.completed = true;
        Ok(())
    }

    pub fn completed_count(&self) -> u32 {
        self.sessions.iter().filter(|s| s.completed).count() as u32
    }

    /// (completed, total) for sessions started in the same ISO week as `now`.
    pub fn week_counts(&self, now: DateTime<Utc>) -> (u32, u32) {
        let week = now.iso_week();
        self.sessions
            .iter()
            .filter(|s| s.started_at.iso_week() == week)
            .fold((0, 0), |(done, total), s| {
                (done + u32::from(s.completed), total + 1)
            })
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn into_sessions(self) -> Vec<Session> {
        self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FuelPlan;
    use chrono::TimeZone;

    fn session(id: &str, day: u32, completed: bool) -> Session {
        let mut s = Session::new(
            id.to_string(),
            format!("Session {}", id),
            Utc.with_ymd_and_hms(2026, 3, day, 8, 0, 0).unwrap(),
            60,
            60.0,
            FuelPlan::new(),
        );
        s.completed = completed;
        s
    }

    fn sample_manager() -> SessionManager {
        // 2026-03-02 is a Monday; 2026-03-09 starts the following ISO week.
        SessionManager::new(vec![
            session("a", 2, true),
            session("b", 4, false),
            session("c", 5, true),
            session("d", 9, false),
        ])
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let mut manager = sample_manager();
        let err = manager.add(session("a", 6, false)).unwrap_err();
        assert!(matches!(err, GiError::DuplicateSession(id) if id == "a"));
        assert_eq!(manager.len(), 4);
    }

    #[test]
    fn test_next_id_skips_taken() {
        let mut manager = SessionManager::new(vec![session("s2", 2, false)]);
        assert_eq!(manager.next_id(), "s3");
        manager.add(session("s3", 3, false)).unwrap();
        assert_eq!(manager.next_id(), "s4");
    }

    #[test]
    fn test_week_counts() {
        let manager = sample_manager();
        let now = Utc.with_ymd_and_hms(2026, 3, 6, 12, 0, 0).unwrap();
        assert_eq!(manager.week_counts(now), (2, 3));

        let next_week = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(manager.week_counts(next_week), (0, 1));
    }

    #[test]
    fn test_latest_active_and_complete() {
        let mut manager = sample_manager();
        assert_eq!(manager.latest_active().unwrap().id, "d");

        manager.complete("d").unwrap();
        assert_eq!(manager.latest_active().unwrap().id, "b");
        assert_eq!(manager.completed_count(), 3);

        assert!(manager.complete("zzz").is_err());
    }

    #[test]
    fn test_resolve() {
        let manager = sample_manager();
        assert_eq!(manager.resolve(Some("b")).unwrap().id, "b");
        assert_eq!(manager.resolve(None).unwrap().id, "d");
        assert!(matches!(
            manager.resolve(Some("nope")),
            Err(GiError::SessionNotFound(_))
        ));
    }
}

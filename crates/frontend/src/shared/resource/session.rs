//! Form session: the state machine of one create/edit dialog.
//!
//! ```text
//! Closed ──open_create──▶ OpenCreate ─┐
//!   ▲    ──open_edit────▶ OpenEdit ───┤ begin_submit (valid)
//!   │                                 ▼
//!   └──── finish(ok) ─────────── Submitting ── finish(err) ──▶ Open*
//! ```
//!
//! `cancel` closes from any state and drops the draft. Each open/cancel
//! starts a new generation; a submit ticket from an older generation can
//! no longer change the session.

use contracts::shared::validation::FormMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update(String),
}

impl SubmitMode {
    pub fn form_mode(&self) -> FormMode {
        match self {
            Self::Create => FormMode::Create,
            Self::Update(_) => FormMode::Edit,
        }
    }

    pub fn target_id(&self) -> Option<&str> {
        match self {
            Self::Create => None,
            Self::Update(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    OpenCreate,
    OpenEdit(String),
    Submitting(SubmitMode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    NotOpen,
    /// A submission of this session is still in flight
    InFlight,
    /// Required field missing; never reaches the network
    Invalid(String),
}

/// Snapshot handed out by [`FormSession::begin_submit`]
#[derive(Debug, Clone)]
pub struct SubmitTicket<D> {
    generation: u64,
    pub mode: SubmitMode,
    pub draft: D,
}

#[derive(Debug, Clone)]
pub struct FormSession<D> {
    state: SessionState,
    draft: Option<D>,
    generation: u64,
}

impl<D: Clone + Default> Default for FormSession<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Clone + Default> FormSession<D> {
    pub fn new() -> Self {
        Self {
            state: SessionState::Closed,
            draft: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, SessionState::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SessionState::Submitting(_))
    }

    pub fn mode(&self) -> Option<FormMode> {
        match &self.state {
            SessionState::Closed => None,
            SessionState::OpenCreate => Some(FormMode::Create),
            SessionState::OpenEdit(_) => Some(FormMode::Edit),
            SessionState::Submitting(mode) => Some(mode.form_mode()),
        }
    }

    pub fn draft(&self) -> Option<&D> {
        self.draft.as_ref()
    }

    /// Open with an empty draft. Any previous draft is discarded.
    pub fn open_create(&mut self) {
        self.generation += 1;
        self.state = SessionState::OpenCreate;
        self.draft = Some(D::default());
    }

    /// Open with a draft seeded from an existing entity.
    pub fn open_edit(&mut self, id: impl Into<String>, draft: D) {
        self.generation += 1;
        self.state = SessionState::OpenEdit(id.into());
        self.draft = Some(draft);
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.state = SessionState::Closed;
        self.draft = None;
    }

    /// Mutate the draft. Refused while closed or submitting.
    pub fn edit_draft(&mut self, f: impl FnOnce(&mut D)) -> bool {
        if self.is_submitting() {
            return false;
        }
        match self.draft.as_mut() {
            Some(draft) => {
                f(draft);
                true
            }
            None => false,
        }
    }

    /// Validate and enter `Submitting`.
    pub fn begin_submit(
        &mut self,
        validate: impl FnOnce(&D, FormMode) -> Result<(), String>,
    ) -> Result<SubmitTicket<D>, SubmitRejected> {
        let mode = match &self.state {
            SessionState::Closed => return Err(SubmitRejected::NotOpen),
            SessionState::Submitting(_) => return Err(SubmitRejected::InFlight),
            SessionState::OpenCreate => SubmitMode::Create,
            SessionState::OpenEdit(id) => SubmitMode::Update(id.clone()),
        };
        let draft = self.draft.clone().ok_or(SubmitRejected::NotOpen)?;
        validate(&draft, mode.form_mode()).map_err(SubmitRejected::Invalid)?;

        self.state = SessionState::Submitting(mode.clone());
        Ok(SubmitTicket {
            generation: self.generation,
            mode,
            draft,
        })
    }

    /// Settle a submission: close on success, reopen with the draft kept on
    /// failure. Returns `false` if the ticket is stale and nothing changed.
    pub fn finish(&mut self, ticket: &SubmitTicket<D>, succeeded: bool) -> bool {
        if ticket.generation != self.generation || !self.is_submitting() {
            return false;
        }
        if succeeded {
            self.state = SessionState::Closed;
            self.draft = None;
            // Late tickets of this generation must not reopen the session.
            self.generation += 1;
        } else {
            self.state = match &ticket.mode {
                SubmitMode::Create => SessionState::OpenCreate,
                SubmitMode::Update(id) => SessionState::OpenEdit(id.clone()),
            };
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_empty(draft: &String, _: FormMode) -> Result<(), String> {
        if draft.trim().is_empty() {
            Err("Name is required".into())
        } else {
            Ok(())
        }
    }

    #[test]
    fn test_open_create_starts_empty() {
        let mut s: FormSession<String> = FormSession::new();
        assert!(!s.is_open());
        s.open_create();
        assert_eq!(s.state(), &SessionState::OpenCreate);
        assert_eq!(s.draft().map(String::as_str), Some(""));
    }

    #[test]
    fn test_invalid_draft_never_submits() {
        let mut s: FormSession<String> = FormSession::new();
        s.open_create();
        s.edit_draft(|d| d.push_str("   "));
        assert_eq!(
            s.begin_submit(non_empty).unwrap_err(),
            SubmitRejected::Invalid("Name is required".into())
        );
        assert_eq!(s.state(), &SessionState::OpenCreate);
    }

    #[test]
    fn test_submit_guard_blocks_double_submit() {
        let mut s: FormSession<String> = FormSession::new();
        s.open_create();
        s.edit_draft(|d| d.push_str("Shoes"));
        let ticket = s.begin_submit(non_empty).unwrap();
        assert_eq!(ticket.mode, SubmitMode::Create);
        assert_eq!(s.begin_submit(non_empty).unwrap_err(), SubmitRejected::InFlight);
        assert!(!s.edit_draft(|d| d.clear()));
        assert!(s.finish(&ticket, true));
        assert_eq!(s.state(), &SessionState::Closed);
        assert!(s.draft().is_none());
    }

    #[test]
    fn test_failure_preserves_draft() {
        let mut s: FormSession<String> = FormSession::new();
        s.open_edit("p5", "Runner".to_string());
        let ticket = s.begin_submit(non_empty).unwrap();
        assert_eq!(ticket.mode, SubmitMode::Update("p5".into()));
        assert!(s.finish(&ticket, false));
        assert_eq!(s.state(), &SessionState::OpenEdit("p5".into()));
        assert_eq!(s.draft().map(String::as_str), Some("Runner"));
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut s: FormSession<String> = FormSession::new();
        s.open_create();
        s.edit_draft(|d| d.push_str("Shoes"));
        let ticket = s.begin_submit(non_empty).unwrap();
        s.cancel();
        s.open_create();
        assert!(!s.finish(&ticket, true));
        assert_eq!(s.state(), &SessionState::OpenCreate);
        assert_eq!(s.draft().map(String::as_str), Some(""));
    }

    #[test]
    fn test_closed_session_rejects_submit_and_edits() {
        let mut s: FormSession<String> = FormSession::new();
        assert_eq!(s.begin_submit(non_empty).unwrap_err(), SubmitRejected::NotOpen);
        assert!(!s.edit_draft(|d| d.push('x')));
    }

    #[test]
    fn test_switching_target_resets_draft() {
        let mut s: FormSession<String> = FormSession::new();
        s.open_edit("a", "Alpha".to_string());
        s.edit_draft(|d| d.push_str(" changed"));
        s.open_edit("b", "Beta".to_string());
        assert_eq!(s.draft().map(String::as_str), Some("Beta"));
        assert_eq!(s.mode(), Some(FormMode::Edit));
    }
}

//! Session state machine for the visit flow.
//!
//! The flow is expressed as pure transitions: [`Session::apply`] consumes the
//! current state and an event and returns the next state, so every path can
//! be tested without any UI or I/O. Events invalid at the current step are
//! rejected with [`CoreError::InvalidTransition`] and the state is returned
//! unchanged inside the error path (the caller still holds its copy).

use serde::{Deserialize, Serialize};

use crate::enums::Step;
use crate::errors::CoreError;
use crate::ornament::OrnamentDesign;
use crate::user::UserData;

/// An input to the session state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Begin a visit from the main page. Discards any previous input.
    Start,
    /// Submit the common survey page (validated).
    SubmitCommon,
    /// Submit the card page (validated).
    SubmitCard,
    /// Go back from the card page to the common survey.
    Back,
    /// The envelope sealing animation finished.
    Sealed,
    /// Confirm an ornament design and move to the tree.
    ConfirmDesign(OrnamentDesign),
    /// Browse the interest ranking.
    GoRanking,
    /// Browse the comment board.
    GoComments,
    /// Return from ranking/comments. Falls back to the main page when the
    /// session never reached the tree (no design chosen).
    ReturnToTree,
    /// An ornament was committed to the tree. One-shot per session.
    Placed,
    /// Reset everything and return to the main page.
    ResetHome,
}

impl SessionEvent {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::SubmitCommon => "submit_common",
            Self::SubmitCard => "submit_card",
            Self::Back => "back",
            Self::Sealed => "sealed",
            Self::ConfirmDesign(_) => "confirm_design",
            Self::GoRanking => "go_ranking",
            Self::GoComments => "go_comments",
            Self::ReturnToTree => "return_to_tree",
            Self::Placed => "placed",
            Self::ResetHome => "reset_home",
        }
    }
}

/// The whole per-visit state: current step, survey input, chosen design,
/// and the one-shot placement gate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub step: Step,
    pub user: UserData,
    pub design: Option<OrnamentDesign>,
    pub has_placed: bool,
}

impl Session {
    /// A fresh session at the main page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event, producing the next state.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when a submit event fails input
    /// validation, and [`CoreError::InvalidTransition`] when the event is
    /// not allowed at the current step.
    pub fn apply(mut self, event: SessionEvent) -> Result<Self, CoreError> {
        match (self.step, event) {
            (_, SessionEvent::ResetHome) => Ok(Self::new()),
            (Step::Main, SessionEvent::Start) => {
                let mut next = Self::new();
                next.step = Step::SurveyCommon;
                Ok(next)
            }
            (Step::SurveyCommon, SessionEvent::SubmitCommon) => {
                self.user.validate_common()?;
                self.step = Step::SurveyGrade;
                Ok(self)
            }
            (Step::SurveyGrade, SessionEvent::SubmitCard) => {
                self.user.validate_card()?;
                self.step = Step::Animation;
                Ok(self)
            }
            (Step::SurveyGrade, SessionEvent::Back) => {
                self.step = Step::SurveyCommon;
                Ok(self)
            }
            (Step::Animation, SessionEvent::Sealed) => {
                self.step = Step::Customize;
                Ok(self)
            }
            (Step::Customize, SessionEvent::ConfirmDesign(design)) => {
                self.design = Some(design);
                self.step = Step::Tree;
                Ok(self)
            }
            (Step::Tree | Step::Comments, SessionEvent::GoRanking) => {
                self.step = Step::Ranking;
                Ok(self)
            }
            (Step::Tree, SessionEvent::GoComments) => {
                self.step = Step::Comments;
                Ok(self)
            }
            (Step::Ranking | Step::Comments, SessionEvent::ReturnToTree) => {
                if self.design.is_some() {
                    self.step = Step::Tree;
                    Ok(self)
                } else {
                    Ok(Self::new())
                }
            }
            (Step::Tree, SessionEvent::Placed) if !self.has_placed => {
                self.has_placed = true;
                Ok(self)
            }
            (step, event) => Err(CoreError::InvalidTransition {
                step: step.as_str().to_string(),
                event: event.as_str().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog;
    use crate::enums::{Affiliation, OrnamentColor, Theme};

    fn filled_user() -> UserData {
        UserData {
            name: "하린".into(),
            affiliation: Some(Affiliation::ThirdYear),
            interests: vec!["UIUX 디자인".into()],
            theme: Some(Theme::FutureResolve),
            title: "내년".into(),
            content: "더 단단해지기".into(),
        }
    }

    fn design() -> OrnamentDesign {
        catalog::pattern(OrnamentColor::Green, "star")
            .unwrap()
            .to_design()
    }

    #[test]
    fn happy_path_reaches_the_tree() {
        let mut session = Session::new().apply(SessionEvent::Start).unwrap();
        session.user = filled_user();

        let session = session
            .apply(SessionEvent::SubmitCommon)
            .unwrap()
            .apply(SessionEvent::SubmitCard)
            .unwrap()
            .apply(SessionEvent::Sealed)
            .unwrap()
            .apply(SessionEvent::ConfirmDesign(design()))
            .unwrap();

        assert_eq!(session.step, Step::Tree);
        assert_eq!(session.design.as_ref().unwrap().id, "star");
        assert!(!session.has_placed);
    }

    #[test]
    fn submit_common_blocks_on_missing_fields() {
        let session = Session::new().apply(SessionEvent::Start).unwrap();
        let err = session.clone().apply(SessionEvent::SubmitCommon).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        // The caller's copy is untouched and can retry after fixing input.
        assert_eq!(session.step, Step::SurveyCommon);
    }

    #[test]
    fn placed_is_one_shot() {
        let mut session = Session {
            step: Step::Tree,
            user: filled_user(),
            design: Some(design()),
            has_placed: false,
        };
        session = session.apply(SessionEvent::Placed).unwrap();
        assert!(session.has_placed);

        let err = session.apply(SessionEvent::Placed).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));
    }

    #[test]
    fn return_without_design_resets_home() {
        let session = Session {
            step: Step::Comments,
            user: filled_user(),
            design: None,
            has_placed: false,
        };
        let session = session.apply(SessionEvent::ReturnToTree).unwrap();
        assert_eq!(session.step, Step::Main);
        assert_eq!(session.user, UserData::default());
    }

    #[test]
    fn return_with_design_goes_back_to_tree() {
        let session = Session {
            step: Step::Ranking,
            user: filled_user(),
            design: Some(design()),
            has_placed: true,
        };
        let session = session.apply(SessionEvent::ReturnToTree).unwrap();
        assert_eq!(session.step, Step::Tree);
        assert!(session.has_placed);
    }

    #[test]
    fn reset_home_works_from_anywhere() {
        let session = Session {
            step: Step::Animation,
            user: filled_user(),
            design: None,
            has_placed: false,
        };
        let session = session.apply(SessionEvent::ResetHome).unwrap();
        assert_eq!(session, Session::new());
    }

    #[test]
    fn events_out_of_order_are_rejected() {
        let err = Session::new().apply(SessionEvent::Sealed).unwrap_err();
        match err {
            CoreError::InvalidTransition { step, event } => {
                assert_eq!(step, "main");
                assert_eq!(event, "sealed");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn start_discards_previous_input() {
        let session = Session {
            step: Step::Main,
            user: filled_user(),
            design: Some(design()),
            has_placed: true,
        };
        let session = session.apply(SessionEvent::Start).unwrap();
        assert_eq!(session.step, Step::SurveyCommon);
        assert_eq!(session.user, UserData::default());
        assert!(session.design.is_none());
        assert!(!session.has_placed);
    }
}

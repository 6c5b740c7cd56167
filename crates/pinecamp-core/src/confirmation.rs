//! Text of the notification shown after an inquiry is accepted.

pub const CONFIRMATION_TITLE: &str = "문의가 접수되었습니다";
pub const CONFIRMATION_BODY: &str = "빠른 시일 내에 담당자가 연락드리겠습니다. 감사합니다.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    pub title: &'static str,
    pub body: &'static str,
}

impl Default for Confirmation {
    fn default() -> Self {
        Self {
            title: CONFIRMATION_TITLE,
            body: CONFIRMATION_BODY,
        }
    }
}

impl std::fmt::Display for Confirmation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.title, self.body)
    }
}

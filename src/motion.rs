/// Where an element starts before its enter animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enter {
    /// 100px to the left.
    FromLeft,
    /// 100px to the right.
    FromRight,
    /// 30px above.
    FromAbove,
    Fade,
}

impl Enter {
    fn hidden_class(self) -> &'static str {
        match self {
            Enter::FromLeft => "opacity-0 -translate-x-[100px]",
            Enter::FromRight => "opacity-0 translate-x-[100px]",
            Enter::FromAbove => "opacity-0 -translate-y-[30px]",
            Enter::Fade => "opacity-0",
        }
    }
}

impl From<crate::content::Side> for Enter {
    fn from(side: crate::content::Side) -> Self {
        match side {
            crate::content::Side::Left => Enter::FromLeft,
            crate::content::Side::Right => Enter::FromRight,
        }
    }
}

pub const STAGGER_MS: u32 = 100;
pub const CARD_DURATION_MS: u32 = 600;

/// Hover growth for cards. Goes on an element without a [`Reveal`] style,
/// since the reveal's inline transition timing would override it.
pub const HOVER_LIFT: &str = "hover:scale-105 transition-transform duration-300";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub enter: Enter,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Reveal {
    pub fn new(enter: Enter, duration_ms: u32) -> Self {
        Self {
            enter,
            duration_ms,
            delay_ms: 0,
        }
    }

    /// A card in a list, delayed by its position.
    pub fn staggered(enter: Enter, index: usize) -> Self {
        Self {
            enter,
            duration_ms: CARD_DURATION_MS,
            delay_ms: STAGGER_MS * index as u32,
        }
    }

    pub fn class(&self, shown: bool) -> &'static str {
        if shown {
            "opacity-100 translate-x-0 translate-y-0"
        } else {
            self.enter.hidden_class()
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transition-property: opacity, translate; transition-duration: {}ms; transition-delay: {}ms",
            self.duration_ms, self.delay_ms
        )
    }
}

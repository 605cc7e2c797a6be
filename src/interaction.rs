//! Interaction state for the page: reveal-on-scroll, short-lived
//! acknowledgment flags, flip cards and the copy-to-clipboard action.
//!
//! Everything here is plain Rust. Browser timers, clipboard and viewport
//! queries come in through the `Scheduler`, `Clipboard` and
//! `CapabilityProbe` traits.

mod clipboard;
mod disclosure;
mod flags;
mod schedule;
mod visibility;

pub use clipboard::{copy_to_clipboard, Clipboard, ClipboardError};
pub use disclosure::{
    is_pointer_capable, CapabilityProbe, CardEvent, Disclosure, Face, FixedProbe,
    MOBILE_BREAKPOINT,
};
pub use flags::{TransientFlags, COPY_ACK, COPY_EMAIL, DOWNLOAD_RESUME, PRESS_PULSE, SEND_EMAIL};
pub use schedule::{ManualScheduler, ManualTimer, Scheduler, Task, TimerHandle};
pub use visibility::{Repeat, VisibilityTrigger, SECTION_THRESHOLD};

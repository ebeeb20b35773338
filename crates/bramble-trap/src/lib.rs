pub mod markup;
pub mod observer;

pub use markup::{document_has_trap, inject_trap, render_trap_element, TRAP_ELEMENT_ID};
pub use observer::{ClickDisposition, TrapObserver, TrapState};

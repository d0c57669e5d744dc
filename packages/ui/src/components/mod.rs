//! Generic widgets shared by every screen.

mod badge;
mod button;
mod card;
mod date_input;
pub mod dropdown_menu;
mod field;
mod input;
mod masked_input;
mod modal;
mod pagination;
mod password_requirements;
mod photo_input;
mod select;
pub mod table;
mod table_filters;
mod textarea;
pub mod toast;

pub use badge::{Badge, BadgeVariant, StatusBadge};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::Card;
pub use date_input::DateInput;
pub use dropdown_menu::{DropdownItem, DropdownMenu};
pub use input::Input;
pub use masked_input::{MaskKind, MaskedInput};
pub use modal::{Modal, ModalSize};
pub use pagination::Pagination;
pub use password_requirements::PasswordRequirements;
pub use photo_input::PhotoInput;
pub use select::{options, Select};
pub use table::{Column, Table};
pub use table_filters::TableFilters;
pub use textarea::Textarea;
pub use toast::{use_toast, ToastKind, ToastProvider, Toaster};

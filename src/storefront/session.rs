//! Per-shopper application state.
//!
//! Everything a page needs to know about the current visitor lives in one
//! [`Session`] that callers own and pass by reference. Reads go through the
//! accessors; writes only happen through the methods below.

use crate::cart::Cart;
use crate::model::User;
use serde::Serialize;

/// Display name given to users who sign in with just an email.
pub const DEFAULT_DISPLAY_NAME: &str = "Người dùng";

#[derive(Debug, Clone, Default, Serialize)]
pub struct Session {
    user: Option<User>,
    auth_modal_open: bool,
    pub cart: Cart,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn auth_modal_open(&self) -> bool {
        self.auth_modal_open
    }

    pub fn open_auth_modal(&mut self) {
        self.auth_modal_open = true;
    }

    pub fn close_auth_modal(&mut self) {
        self.auth_modal_open = false;
    }

    /// Records a successful sign-in and dismisses the auth modal.
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.auth_modal_open = false;
    }

    /// Signs out. The cart is kept.
    pub fn sign_out(&mut self) {
        self.user = None;
    }
}

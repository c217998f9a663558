//! Auth endpoints: command models and response data.

use flashgen_core::{CoreError, IsoDateString};
use serde::{Deserialize, Serialize};

use crate::dto::{Confirmed, UserDto};
use crate::validation::{
    validate_email, validate_new_password, validate_redirect_url, validate_required, Normalize,
    Validate, Violations,
};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignUpCommand {
    pub email: String,
    pub password: String,
    pub email_redirect_to: String,
}

impl Normalize for SignUpCommand {}

impl Validate for SignUpCommand {
    fn validate(&self) -> Result<(), CoreError> {
        let mut v = Violations::new();
        v.check("email", validate_email(&self.email));
        v.check("password", validate_new_password(&self.password));
        v.check("emailRedirectTo", validate_redirect_url(&self.email_redirect_to));
        v.into_result()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponseData {
    pub user: UserDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignInCommand {
    pub email: String,
    pub password: String,
}

impl Normalize for SignInCommand {}

impl Validate for SignInCommand {
    fn validate(&self) -> Result<(), CoreError> {
        let mut v = Violations::new();
        v.check("email", validate_email(&self.email));
        v.check("password", validate_required(&self.password, "Password"));
        v.into_result()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub access_token: String,
    pub expires_at: IsoDateString,
}

/// `session` is `null` while the email address is still unverified.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponseData {
    pub session: Option<SessionDto>,
    pub user: UserDto,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignOutResponseData {
    pub signed_out: Confirmed,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MeResponseData {
    pub user: UserDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResendVerificationCommand {
    pub email: String,
    pub email_redirect_to: String,
}

impl Normalize for ResendVerificationCommand {}

impl Validate for ResendVerificationCommand {
    fn validate(&self) -> Result<(), CoreError> {
        let mut v = Violations::new();
        v.check("email", validate_email(&self.email));
        v.check("emailRedirectTo", validate_redirect_url(&self.email_redirect_to));
        v.into_result()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResendVerificationResponseData {
    pub sent: Confirmed,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordCommand {
    pub current_password: String,
    pub new_password: String,
}

impl Normalize for ChangePasswordCommand {}

impl Validate for ChangePasswordCommand {
    fn validate(&self) -> Result<(), CoreError> {
        let mut v = Violations::new();
        v.check(
            "currentPassword",
            validate_required(&self.current_password, "Current password"),
        );
        v.check("newPassword", validate_new_password(&self.new_password));
        v.into_result()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordResponseData {
    pub changed: Confirmed,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAccountCommand {
    pub password: String,
}

impl Normalize for DeleteAccountCommand {}

impl Validate for DeleteAccountCommand {
    fn validate(&self) -> Result<(), CoreError> {
        let mut v = Violations::new();
        v.check("password", validate_required(&self.password, "Password"));
        v.into_result()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAccountResponseData {
    pub deleted: Confirmed,
}

//! I define rust model for the `WAC-Allow` header, which
//! advertises resolved access modes to clients.
//!
//! ```txt
//! wac-allow        = "WAC-Allow" ":" OWS #access-param
//! access-param     = permission-group OWS "=" OWS access-modes
//! permission-group = 1*ALPHA
//! access-modes     = DQUOTE OWS *1(access-mode *(RWS access-mode)) OWS DQUOTE
//! access-mode      = "read" / "write" / "append" / "control"
//! ```
//!

use std::str::FromStr;

use http::HeaderValue;
use trellis_access_control::model::{AccessMode, AccessModeSet};

/// A struct representing the `WAC-Allow` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WacAllow {
    /// Access params, one per permission group.
    pub access_params: Vec<AccessParam>,
}

impl WacAllow {
    /// Get a new [`WacAllow`] advertising given mode sets for
    /// the user and public permission groups.
    pub fn new(user_modes: AccessModeSet, public_modes: AccessModeSet) -> Self {
        Self {
            access_params: vec![
                AccessParam {
                    permission_group: PermissionGroup::User,
                    access_modes: user_modes,
                },
                AccessParam {
                    permission_group: PermissionGroup::Public,
                    access_modes: public_modes,
                },
            ],
        }
    }

    /// Encode the header as a string.
    pub fn str_encode(&self) -> String {
        self.access_params
            .iter()
            .map(AccessParam::str_encode)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Encode the header as a header value.
    pub fn to_header_value(&self) -> HeaderValue {
        HeaderValue::from_str(&self.str_encode())
            .expect("Encoded wac-allow must be a valid header value")
    }

    /// Decode the header from an encoded value.
    pub fn decode(value: &str) -> Result<Self, InvalidEncodedWacAllow> {
        let access_params = value
            .split(',')
            .map(AccessParam::decode)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { access_params })
    }
}

/// A struct representing the `access-param` production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessParam {
    /// Permission group.
    pub permission_group: PermissionGroup,

    /// Access modes granted to the group.
    pub access_modes: AccessModeSet,
}

impl AccessParam {
    /// Encode the access param as a string.
    pub fn str_encode(&self) -> String {
        let modes = self
            .access_modes
            .into_iter()
            .map(mode_token)
            .collect::<Vec<_>>()
            .join(" ");
        format!("{}=\"{}\"", self.permission_group.as_str(), modes)
    }

    /// Decode an access param from an encoded value.
    pub fn decode(value: &str) -> Result<Self, InvalidEncodedWacAllow> {
        let (group, modes) = value.split_once('=').ok_or(InvalidEncodedWacAllow)?;

        let permission_group = PermissionGroup::from_str(group.trim())?;

        let modes = modes.trim();
        if !(modes.len() >= 2 && modes.starts_with('"') && modes.ends_with('"')) {
            return Err(InvalidEncodedWacAllow);
        }

        let access_modes = modes[1..modes.len() - 1]
            .split_ascii_whitespace()
            .map(|token| mode_from_token(token).ok_or(InvalidEncodedWacAllow))
            .try_fold(AccessModeSet::default(), |set, mode| Ok(set | mode?))?;

        Ok(Self {
            permission_group,
            access_modes,
        })
    }
}

/// An enum representing permission groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionGroup {
    /// The authenticated user of the request.
    User,

    /// The public.
    Public,
}

impl PermissionGroup {
    /// Get the group as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Public => "public",
        }
    }
}

impl FromStr for PermissionGroup {
    type Err = InvalidEncodedWacAllow;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "public" => Ok(Self::Public),
            _ => Err(InvalidEncodedWacAllow),
        }
    }
}

fn mode_token(mode: AccessMode) -> &'static str {
    match mode {
        AccessMode::Read => "read",
        AccessMode::Write => "write",
        AccessMode::Append => "append",
        AccessMode::Control => "control",
    }
}

fn mode_from_token(token: &str) -> Option<AccessMode> {
    match token {
        "read" => Some(AccessMode::Read),
        "write" => Some(AccessMode::Write),
        "append" => Some(AccessMode::Append),
        "control" => Some(AccessMode::Control),
        _ => None,
    }
}

/// Invalid encoded wac-allow.
#[derive(Debug, thiserror::Error)]
#[error("Invalid encoded wac-allow.")]
pub struct InvalidEncodedWacAllow;

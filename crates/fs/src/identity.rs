use hashbrown::HashMap;
use log::debug;

use crate::{FsError, IdentityKind};

/// Maps numeric owner/group ids to display names.
///
/// A missing record is an error; callers treat it as fatal.
pub trait IdentitySource {
    fn owner_name(&mut self, uid: u32) -> Result<String, FsError>;
    fn group_name(&mut self, gid: u32) -> Result<String, FsError>;
}

/// Lookups against the system passwd/group databases, cached for the run.
#[derive(Debug, Default)]
pub struct SystemIdentity {
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl SystemIdentity {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentitySource for SystemIdentity {
    fn owner_name(&mut self, uid: u32) -> Result<String, FsError> {
        if let Some(name) = self.users.get(&uid) {
            return Ok(name.clone());
        }

        let user = uzers::get_user_by_uid(uid).ok_or(FsError::IdentityUnavailable {
            kind: IdentityKind::User,
            id: uid,
        })?;
        let name = user.name().to_string_lossy().into_owned();
        debug!("[identity] uid {uid} -> {name}");

        self.users.insert(uid, name.clone());
        Ok(name)
    }

    fn group_name(&mut self, gid: u32) -> Result<String, FsError> {
        if let Some(name) = self.groups.get(&gid) {
            return Ok(name.clone());
        }

        let group = uzers::get_group_by_gid(gid).ok_or(FsError::IdentityUnavailable {
            kind: IdentityKind::Group,
            id: gid,
        })?;
        let name = group.name().to_string_lossy().into_owned();
        debug!("[identity] gid {gid} -> {name}");

        self.groups.insert(gid, name.clone());
        Ok(name)
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;

use hashbrown::HashMap;
use sls_fs::{FsError, IdentityKind, IdentitySource};

/// In-memory identity database.
#[derive(Debug, Default)]
pub struct StaticIdentity {
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
    fallback: Option<(String, String)>,
}

impl StaticIdentity {
    /// Every uid resolves to `user`, every gid to `group`.
    pub fn uniform(user: &str, group: &str) -> Self {
        Self {
            fallback: Some((user.to_owned(), group.to_owned())),
            ..Self::default()
        }
    }

    /// Nothing resolves.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, uid: u32, name: &str) -> Self {
        self.users.insert(uid, name.to_owned());
        self
    }

    pub fn with_group(mut self, gid: u32, name: &str) -> Self {
        self.groups.insert(gid, name.to_owned());
        self
    }
}

impl IdentitySource for StaticIdentity {
    fn owner_name(&mut self, uid: u32) -> Result<String, FsError> {
        self.users
            .get(&uid)
            .cloned()
            .or_else(|| self.fallback.as_ref().map(|(u, _)| u.clone()))
            .ok_or(FsError::IdentityUnavailable {
                kind: IdentityKind::User,
                id: uid,
            })
    }

    fn group_name(&mut self, gid: u32) -> Result<String, FsError> {
        self.groups
            .get(&gid)
            .cloned()
            .or_else(|| self.fallback.as_ref().map(|(_, g)| g.clone()))
            .ok_or(FsError::IdentityUnavailable {
                kind: IdentityKind::Group,
                id: gid,
            })
    }
}

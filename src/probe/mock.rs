use crate::probe::GitProbe;

/// Mock probe for testing without a git binary or repository.
///
/// Starts out answering like a machine with no git installed; use the
/// setters to script each query.
pub struct MockProbe {
    git_available: bool,
    is_repository: bool,
    has_tags: bool,
    repository_url: String,
    remote_reachable: bool,
    local_head: String,
    remote_head: String,
    local_tag: String,
    remote_tag: String,
    branch: String,
}

impl MockProbe {
    /// Create a mock probe where every query answers negatively.
    pub fn new() -> Self {
        MockProbe {
            git_available: false,
            is_repository: false,
            has_tags: false,
            repository_url: String::new(),
            remote_reachable: false,
            local_head: String::new(),
            remote_head: String::new(),
            local_tag: String::new(),
            remote_tag: String::new(),
            branch: String::new(),
        }
    }

    /// Create a mock probe resembling a healthy local repository with a
    /// single tag.
    pub fn healthy_repository(tag: impl Into<String>, head: impl Into<String>) -> Self {
        let mut probe = Self::new();
        probe.set_git_available(true);
        probe.set_is_repository(true);
        probe.set_has_tags(true);
        probe.set_local_tag(tag);
        probe.set_local_head(head);
        probe.set_branch("main");
        probe
    }

    pub fn set_git_available(&mut self, available: bool) {
        self.git_available = available;
    }

    pub fn set_is_repository(&mut self, is_repository: bool) {
        self.is_repository = is_repository;
    }

    pub fn set_has_tags(&mut self, has_tags: bool) {
        self.has_tags = has_tags;
    }

    pub fn set_repository_url(&mut self, url: impl Into<String>) {
        self.repository_url = url.into();
    }

    pub fn set_remote_reachable(&mut self, reachable: bool) {
        self.remote_reachable = reachable;
    }

    pub fn set_local_head(&mut self, hash: impl Into<String>) {
        self.local_head = hash.into();
    }

    pub fn set_remote_head(&mut self, hash: impl Into<String>) {
        self.remote_head = hash.into();
    }

    pub fn set_local_tag(&mut self, tag: impl Into<String>) {
        self.local_tag = tag.into();
    }

    pub fn set_remote_tag(&mut self, tag: impl Into<String>) {
        self.remote_tag = tag.into();
    }

    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.branch = branch.into();
    }
}

impl Default for MockProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProbe for MockProbe {
    fn is_git_available(&self) -> bool {
        self.git_available
    }

    fn is_git_repository(&self) -> bool {
        self.is_repository
    }

    fn has_git_tags(&self) -> bool {
        self.is_repository && self.has_tags
    }

    fn repository_url(&self) -> String {
        self.repository_url.clone()
    }

    fn validate_remote_repository(&self, url: &str) -> bool {
        !url.is_empty() && self.remote_reachable
    }

    fn local_head_hash(&self) -> String {
        self.local_head.clone()
    }

    fn remote_head_hash(&self, _url: &str) -> String {
        self.remote_head.clone()
    }

    fn latest_local_tag(&self) -> String {
        self.local_tag.clone()
    }

    fn latest_remote_tag(&self, _url: &str) -> String {
        self.remote_tag.clone()
    }

    fn current_branch(&self) -> String {
        self.branch.clone()
    }
}

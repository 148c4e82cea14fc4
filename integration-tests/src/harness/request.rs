use pathway_core::request::PathHeader;

/// In-memory stand-in for a proxy's request header.
///
/// Counts `set_path` calls so tests can assert that no-op operations never
/// rewrite the header.
#[derive(Debug)]
pub struct TestRequest {
    path: String,
    rewrites: usize,
}

impl TestRequest {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            rewrites: 0,
        }
    }

    pub fn rewrites(&self) -> usize {
        self.rewrites
    }
}

impl PathHeader for TestRequest {
    fn path(&self) -> &str {
        &self.path
    }

    fn set_path(&mut self, path: String) {
        self.path = path;
        self.rewrites += 1;
    }
}

/// Cleanup steps that run in reverse registration order, at the latest when
/// the guard is dropped. Registering a release step right after acquiring a
/// resource means an early `?` return still releases it.
#[derive(Default)]
pub struct Teardown {
    steps: Vec<Box<dyn FnOnce()>>,
}

impl Teardown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: impl FnOnce() + 'static) {
        self.steps.push(Box::new(step));
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every pending step, newest first. Steps run once.
    pub fn run(&mut self) {
        while let Some(step) = self.steps.pop() {
            step();
        }
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        self.run();
    }
}

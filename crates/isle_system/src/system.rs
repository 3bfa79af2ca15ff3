//! Systems and system groups.

use std::time::Duration;

use isle_component::Engine;

type UpdateFn = Box<dyn FnMut(&mut Engine, Duration)>;

/// A named update function.
///
/// Systems keep no component storage of their own. Peripherals they need
/// (input devices, draw targets) are captured when the closure is built.
pub struct System {
    name: String,
    update: UpdateFn,
}

impl System {
    /// Create a system from a name and an update closure.
    pub fn new<F>(name: impl Into<String>, update: F) -> Self
    where
        F: FnMut(&mut Engine, Duration) + 'static,
    {
        Self {
            name: name.into(),
            update: Box::new(update),
        }
    }

    /// The system's name, used in logs.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the update once.
    pub fn run(&mut self, engine: &mut Engine, dt: Duration) {
        (self.update)(engine, dt);
    }
}

impl std::fmt::Debug for System {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("System").field("name", &self.name).finish()
    }
}

/// An ordered list of systems that run back to back.
#[derive(Debug)]
pub struct SystemGroup {
    name: String,
    systems: Vec<System>,
}

impl SystemGroup {
    /// Group `systems` under `name`, run in the given order.
    #[must_use]
    pub fn new(name: impl Into<String>, systems: Vec<System>) -> Self {
        Self {
            name: name.into(),
            systems,
        }
    }

    /// The group's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a system after the existing ones.
    pub fn push(&mut self, system: System) {
        self.systems.push(system);
    }

    /// System names in run order.
    pub fn system_names(&self) -> impl Iterator<Item = &str> {
        self.systems.iter().map(System::name)
    }

    /// Number of systems in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Returns `true` if the group has no systems.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Run every system once, in order.
    pub fn run(&mut self, engine: &mut Engine, dt: Duration) {
        for system in &mut self.systems {
            system.run(engine, dt);
        }
    }
}

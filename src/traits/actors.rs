use glam::Vec3;

/// The player character
pub trait PlayerActor {
    fn position(&self) -> Vec3;

    fn respawn(&mut self, at: Vec3);
}

/// Capability for actors that can be knocked out by the power attack
pub trait Stunnable {
    fn stunned(&mut self);
}

/// Anything tagged as an enemy. Not every enemy can be stunned.
pub trait EnemyActor {
    fn as_stunnable(&mut self) -> Option<&mut dyn Stunnable> {
        None
    }
}

/// Scene lookup for the actors the session drives
pub trait ActorRegistry {
    fn player(&mut self) -> Option<&mut dyn PlayerActor>;

    fn enemies(&mut self) -> Vec<&mut dyn EnemyActor>;
}

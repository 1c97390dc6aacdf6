//! Subject lookup
//!
//! The camera never holds a reference to the entity it follows. It keeps an
//! [`EntityId`] and asks a [`SubjectLocator`] for the current pose each frame,
//! so a missing or despawned subject is just a lookup that returns `None`.

use chaserig_core::{EntityId, Pose, Transform};

/// Finds entities by tag and reports their pose
pub trait SubjectLocator {
    /// Find the first entity carrying `tag`
    fn find_tagged(&self, tag: &str) -> Option<EntityId>;

    /// Current pose of an entity, or `None` if it no longer exists
    fn pose(&self, id: EntityId) -> Option<Pose>;
}

/// An entity in a [`Scene`]
#[derive(Debug, Clone)]
struct SceneEntity {
    id: EntityId,
    tag: String,
    transform: Transform,
}

/// Minimal tag-indexed scene of transforms
#[derive(Debug, Clone, Default)]
pub struct Scene {
    entities: Vec<SceneEntity>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity and return its ID
    pub fn spawn(&mut self, tag: impl Into<String>, transform: Transform) -> EntityId {
        let id = EntityId::new();
        self.entities.push(SceneEntity {
            id,
            tag: tag.into(),
            transform,
        });
        id
    }

    /// Remove an entity. Returns `true` if it existed.
    pub fn despawn(&mut self, id: EntityId) -> bool {
        let before = self.entities.len();
        self.entities.retain(|e| e.id != id);
        self.entities.len() != before
    }

    /// Number of entities in the scene
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn transform(&self, id: EntityId) -> Option<&Transform> {
        self.entities
            .iter()
            .find(|e| e.id == id)
            .map(|e| &e.transform)
    }

    pub fn transform_mut(&mut self, id: EntityId) -> Option<&mut Transform> {
        self.entities
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| &mut e.transform)
    }
}

impl SubjectLocator for Scene {
    fn find_tagged(&self, tag: &str) -> Option<EntityId> {
        self.entities.iter().find(|e| e.tag == tag).map(|e| e.id)
    }

    fn pose(&self, id: EntityId) -> Option<Pose> {
        self.transform(id).map(Pose::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_find_tagged() {
        let mut scene = Scene::new();
        assert!(scene.find_tagged("Player").is_none());

        scene.spawn("Prop", Transform::default());
        let player = scene.spawn("Player", Transform::from_position(Vec3::new(1.0, 0.0, 2.0)));
        scene.spawn("Player", Transform::default());

        assert_eq!(scene.find_tagged("Player"), Some(player));
        assert_eq!(scene.pose(player).map(|p| p.position), Some(Vec3::new(1.0, 0.0, 2.0)));
    }

    #[test]
    fn test_despawn() {
        let mut scene = Scene::new();
        let id = scene.spawn("Player", Transform::default());
        assert_eq!(scene.len(), 1);

        assert!(scene.despawn(id));
        assert!(!scene.despawn(id));
        assert!(scene.is_empty());
        assert!(scene.pose(id).is_none());
    }

    #[test]
    fn test_transform_mut() {
        let mut scene = Scene::new();
        let id = scene.spawn("Player", Transform::default());
        if let Some(transform) = scene.transform_mut(id) {
            transform.translate(Vec3::X);
        }
        assert_eq!(scene.pose(id).map(|p| p.position), Some(Vec3::X));
    }
}

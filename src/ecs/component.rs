// src/ecs/component.rs

use std::collections::HashMap;

use crate::ecs::entity::Entity;

/// Component（コンポーネント）トレイトだよ！
///
/// コンポーネントはただのデータ。振る舞いは持たない。
/// 唯一のお約束は「どのエンティティのものか」を自分で知っていること！
/// `entity()` が返す ID が、ストレージに入れるときのキーになるよ。
pub trait Component: std::fmt::Debug + 'static {
    /// このコンポーネントが紐づいているエンティティ。
    fn entity(&self) -> Entity;
}

/// ComponentStore（コンポーネントストア）だよ！
/// 一種類のコンポーネントを `HashMap<Entity, T>` でまとめて管理する箱。📦
/// 一つのエンティティにつき、同じ型のコンポーネントは最大一個 (あとから入れた方が勝つ)。
#[derive(Debug)]
pub struct ComponentStore<T: Component> {
    components: HashMap<Entity, T>,
}

impl<T: Component> Default for ComponentStore<T> {
    fn default() -> Self {
        Self {
            components: HashMap::new(),
        }
    }
}

impl<T: Component> ComponentStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// コンポーネントを入れるよ。キーは `component.entity()`。
    /// 同じエンティティの分がもう入ってたら上書き！
    pub fn set(&mut self, component: T) {
        self.components.insert(component.entity(), component);
    }

    /// 戻り値: `Some(&T)` or `None`
    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.components.get(&entity)
    }

    /// 戻り値: `Some(&mut T)` or `None`
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.components.get_mut(&entity)
    }

    pub fn has(&self, entity: Entity) -> bool {
        self.components.contains_key(&entity)
    }

    /// 削除したデータを返すよ。なければ `None` (何も起きない)。
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        self.components.remove(&entity)
    }

    /// 入ってる全部のコンポーネントを Vec で返す。順番は決まってないよ。
    pub fn get_all(&self) -> Vec<&T> {
        self.components.values().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Entity, &T)> {
        self.components.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Entity, &mut T)> {
        self.components.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn clear(&mut self) {
        self.components.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Label {
        entity: Entity,
        value: String,
    }

    impl Component for Label {
        fn entity(&self) -> Entity {
            self.entity
        }
    }

    fn label(id: usize, value: &str) -> Label {
        Label {
            entity: Entity(id),
            value: value.to_string(),
        }
    }

    #[test]
    fn set_then_get_returns_the_component() {
        let mut store = ComponentStore::new();
        let component = label(3, "test");

        store.set(component.clone());

        assert_eq!(store.get(Entity(3)), Some(&component));
        assert!(store.has(Entity(3)));
    }

    #[test]
    fn set_twice_for_same_entity_overwrites() {
        let mut store = ComponentStore::new();
        store.set(label(1, "first"));
        store.set(label(1, "second"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(Entity(1)).map(|l| l.value.as_str()), Some("second"));
    }

    #[test]
    fn remove_makes_component_absent() {
        let mut store = ComponentStore::new();
        store.set(label(7, "gone"));

        let removed = store.remove(Entity(7));

        assert_eq!(removed, Some(label(7, "gone")));
        assert!(!store.has(Entity(7)));
        assert_eq!(store.get(Entity(7)), None);
    }

    #[test]
    fn remove_missing_is_a_no_op() {
        let mut store: ComponentStore<Label> = ComponentStore::new();
        store.set(label(0, "stay"));

        assert_eq!(store.remove(Entity(42)), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_all_returns_one_record_per_entity() {
        let mut store = ComponentStore::new();
        store.set(label(0, "a"));
        store.set(label(1, "b"));
        store.set(label(2, "c"));
        store.set(label(1, "b2"));

        let mut values: Vec<&str> = store.get_all().iter().map(|l| l.value.as_str()).collect();
        values.sort_unstable();

        assert_eq!(values, vec!["a", "b2", "c"]);
    }

    #[test]
    fn get_all_on_empty_store_is_empty() {
        let store: ComponentStore<Label> = ComponentStore::new();
        assert!(store.get_all().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn get_mut_changes_stored_value() {
        let mut store = ComponentStore::new();
        store.set(label(5, "before"));

        if let Some(l) = store.get_mut(Entity(5)) {
            l.value.push_str("-after");
        }

        assert_eq!(store.get(Entity(5)).map(|l| l.value.as_str()), Some("before-after"));
    }

    #[test]
    fn clear_removes_everything() {
        let mut store = ComponentStore::new();
        store.set(label(0, "a"));
        store.set(label(1, "b"));

        store.clear();

        assert!(store.is_empty());
        assert!(!store.has(Entity(0)));
    }
}

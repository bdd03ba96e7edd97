//! Deferred line-of-sight задачи
//!
//! Тик N ставит задачу (камера в WithinRange), тик N+1 её выполняет -
//! в самом начале цепочки, до re-evaluation. Лаг в один тик: ожидаемое
//! поведение. Отмены нет: задача для камеры, которая уже потеряла цель
//! или despawn'нулась, просто ничего не делает.

use bevy::prelude::*;

/// Счётчик тиков сенсоров (инкремент в начале каждого FixedUpdate)
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SensorClock {
    pub tick: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SightingTask {
    pub watcher: Entity,
    /// Тик, на котором задача поставлена
    pub scheduled_at: u64,
}

#[derive(Resource, Debug, Default)]
pub struct PendingSightings {
    tasks: Vec<SightingTask>,
}

impl PendingSightings {
    /// Одна задача на камеру; повторная постановка игнорируется
    pub fn schedule(&mut self, watcher: Entity, tick: u64) -> bool {
        if self.is_pending(watcher) {
            return false;
        }
        self.tasks.push(SightingTask {
            watcher,
            scheduled_at: tick,
        });
        true
    }

    pub fn is_pending(&self, watcher: Entity) -> bool {
        self.tasks.iter().any(|task| task.watcher == watcher)
    }

    /// Забрать задачи, поставленные до `tick` (текущий тик не трогаем)
    pub fn take_due(&mut self, tick: u64) -> Vec<SightingTask> {
        let (due, later): (Vec<_>, Vec<_>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|task| task.scheduled_at < tick);
        self.tasks = later;
        due
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

//! 事件总线系统，用于解耦战斗会话与观察者
//!
//! 战斗会话把每一次状态变化发布为 [`CombatEvent`]：
//! - 订阅者按事件类型或全局注册
//! - 按优先级顺序处理
//! - 保留有限长度的事件历史

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use combat::Winner;

/// 战斗事件定义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// 战斗开始
    CombatStarted { boss_id: String, boss_name: String },
    /// 一次技能对撞的结果
    ClashResolved {
        character_skill: String,
        boss_skill: String,
        character_power: u32,
        boss_power: u32,
        winner: Winner,
    },
    /// 造成伤害（已计算抗性）
    DamageDealt {
        target: String,
        damage: u32,
        remaining_health: u32,
    },
    /// Boss 阶段转换
    BossPhaseChanged {
        boss_id: String,
        phase: u32,
        name: String,
    },
    /// 腐化值变化
    CorruptionChanged {
        character_id: String,
        delta: i32,
        corruption: u8,
    },
    /// 获得经验
    ExperienceGained {
        character_id: String,
        amount: u32,
        level: u32,
    },
    /// 新回合开始
    TurnAdvanced { turn: u32 },
    /// 回合因非法行动被中止
    TurnAborted { turn: u32, reason: String },
    /// 战斗结束
    CombatEnded {
        boss_id: String,
        victory: bool,
        turn: u32,
    },
}

impl CombatEvent {
    /// 获取事件类型的字符串标识（用于订阅）
    pub fn event_type(&self) -> &'static str {
        match self {
            CombatEvent::CombatStarted { .. } => "CombatStarted",
            CombatEvent::ClashResolved { .. } => "ClashResolved",
            CombatEvent::DamageDealt { .. } => "DamageDealt",
            CombatEvent::BossPhaseChanged { .. } => "BossPhaseChanged",
            CombatEvent::CorruptionChanged { .. } => "CorruptionChanged",
            CombatEvent::ExperienceGained { .. } => "ExperienceGained",
            CombatEvent::TurnAdvanced { .. } => "TurnAdvanced",
            CombatEvent::TurnAborted { .. } => "TurnAborted",
            CombatEvent::CombatEnded { .. } => "CombatEnded",
        }
    }
}

/// 事件处理器优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    /// 最高优先级 - 用于关键系统事件
    Critical = 0,
    /// 高优先级 - 用于游戏核心逻辑
    High = 1,
    /// 普通优先级 - 默认优先级
    Normal = 2,
    /// 低优先级 - 用于统计等
    Low = 3,
    /// 最低优先级 - 用于日志等
    Lowest = 4,
}

/// 事件处理器 trait
pub trait EventHandler: Send + Sync {
    /// 处理事件
    fn handle(&mut self, event: &CombatEvent);

    /// 事件处理器的名称（用于调试）
    fn name(&self) -> &str;

    /// 优先级（数字越小优先级越高）
    fn priority(&self) -> Priority {
        Priority::Normal
    }

    /// 是否应该处理此事件（事件过滤）
    fn should_handle(&self, _event: &CombatEvent) -> bool {
        true
    }
}

struct HandlerEntry {
    handler: Box<dyn EventHandler>,
    priority: Priority,
}

/// 事件总线 - 订阅者模式加队列模式
///
/// 发布时立即分发给订阅者，同时把事件放入队列，供调用方稍后 `drain`。
pub struct EventBus {
    events: Vec<CombatEvent>,
    handlers: HashMap<&'static str, Vec<HandlerEntry>>,
    global_handlers: Vec<HandlerEntry>,
    history: Vec<CombatEvent>,
    max_history: usize,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_history_size(100)
    }

    /// 创建一个指定历史记录大小的事件总线
    pub fn with_history_size(max_history: usize) -> Self {
        Self {
            events: Vec::new(),
            handlers: HashMap::new(),
            global_handlers: Vec::new(),
            history: Vec::new(),
            max_history,
        }
    }

    /// 发布事件
    ///
    /// 未被 `drain` 取走的事件与历史记录共用同一上限，超出时丢弃最旧的。
    pub fn publish(&mut self, event: CombatEvent) {
        self.add_to_history(event.clone());
        self.dispatch_to_handlers(&event);
        if self.max_history == 0 {
            return;
        }
        if self.events.len() >= self.max_history {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// 获取所有待处理事件并清空队列
    pub fn drain(&mut self) -> impl Iterator<Item = CombatEvent> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// 注册事件处理器（处理特定类型的事件）
    pub fn subscribe(&mut self, event_type: &'static str, handler: Box<dyn EventHandler>) {
        let priority = handler.priority();
        let handlers = self.handlers.entry(event_type).or_default();
        handlers.push(HandlerEntry { handler, priority });
        handlers.sort_by(|a, b| a.priority.cmp(&b.priority));
    }

    /// 注册全局事件处理器（处理所有事件）
    pub fn subscribe_all(&mut self, handler: Box<dyn EventHandler>) {
        let priority = handler.priority();
        self.global_handlers.push(HandlerEntry { handler, priority });
        self.global_handlers
            .sort_by(|a, b| a.priority.cmp(&b.priority));
    }

    fn dispatch_to_handlers(&mut self, event: &CombatEvent) {
        for entry in &mut self.global_handlers {
            if entry.handler.should_handle(event) {
                entry.handler.handle(event);
            }
        }

        if let Some(handlers) = self.handlers.get_mut(event.event_type()) {
            for entry in handlers {
                if entry.handler.should_handle(event) {
                    entry.handler.handle(event);
                }
            }
        }
    }

    fn add_to_history(&mut self, event: CombatEvent) {
        if self.max_history == 0 {
            return;
        }
        if self.history.len() >= self.max_history {
            self.history.remove(0);
        }
        self.history.push(event);
    }

    /// 获取事件历史（最近的 n 个事件）
    pub fn get_history(&self, count: usize) -> &[CombatEvent] {
        let start = self.history.len().saturating_sub(count);
        &self.history[start..]
    }

    pub fn full_history(&self) -> &[CombatEvent] {
        &self.history
    }

    pub fn subscriber_count(&self) -> usize {
        self.global_handlers.len() + self.handlers.values().map(Vec::len).sum::<usize>()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// ========== 内置事件处理器 ==========

/// 日志记录器 - 把事件写成可读消息
pub struct LoggingHandler {
    messages: Arc<Mutex<Vec<String>>>,
}

impl LoggingHandler {
    pub fn new(messages: Arc<Mutex<Vec<String>>>) -> Self {
        Self { messages }
    }
}

impl EventHandler for LoggingHandler {
    fn handle(&mut self, event: &CombatEvent) {
        let message = match event {
            CombatEvent::ClashResolved {
                character_skill,
                boss_skill,
                character_power,
                boss_power,
                winner,
            } => format!(
                "{} ({}) vs {} ({}): {} wins",
                character_skill, character_power, boss_skill, boss_power, winner
            ),
            CombatEvent::DamageDealt { target, damage, .. } => {
                format!("{} takes {} damage", target, damage)
            }
            CombatEvent::BossPhaseChanged { name, phase, .. } => {
                format!("Phase {}: {}", phase, name)
            }
            CombatEvent::ExperienceGained { amount, level, .. } => {
                format!("Gained {} experience (level {})", amount, level)
            }
            CombatEvent::TurnAborted { reason, .. } => format!("Turn aborted: {}", reason),
            _ => return,
        };

        if let Ok(mut logs) = self.messages.lock() {
            logs.push(message);
        }
    }

    fn name(&self) -> &str {
        "LoggingHandler"
    }

    fn priority(&self) -> Priority {
        Priority::Lowest
    }
}

/// 战斗统计数据
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombatStats {
    pub clashes_won: u32,
    pub clashes_lost: u32,
    pub damage_dealt: u32,
    pub damage_taken: u32,
    pub phases_seen: u32,
}

/// 战斗统计处理器 - 通过共享句柄读取统计结果
pub struct CombatStatsHandler {
    character_id: String,
    stats: Arc<Mutex<CombatStats>>,
}

impl CombatStatsHandler {
    pub fn new(character_id: &str) -> Self {
        Self {
            character_id: character_id.to_string(),
            stats: Arc::new(Mutex::new(CombatStats::default())),
        }
    }

    /// Shared view of the counters, still readable after the handler is boxed.
    pub fn stats(&self) -> Arc<Mutex<CombatStats>> {
        Arc::clone(&self.stats)
    }
}

impl EventHandler for CombatStatsHandler {
    fn handle(&mut self, event: &CombatEvent) {
        let Ok(mut stats) = self.stats.lock() else {
            return;
        };
        match event {
            CombatEvent::ClashResolved { winner, .. } => match winner {
                Winner::Character => stats.clashes_won += 1,
                Winner::Boss => stats.clashes_lost += 1,
            },
            CombatEvent::DamageDealt { target, damage, .. } => {
                if *target == self.character_id {
                    stats.damage_taken += damage;
                } else {
                    stats.damage_dealt += damage;
                }
            }
            CombatEvent::BossPhaseChanged { .. } => stats.phases_seen += 1,
            _ => {}
        }
    }

    fn name(&self) -> &str {
        "CombatStatsHandler"
    }

    fn priority(&self) -> Priority {
        Priority::Low
    }
}

//src/combat/src/rng.rs
use rand::{
    distr::uniform,
    Rng, SeedableRng,
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// 战斗专用的确定性RNG系统
#[derive(Debug, Clone)]
pub struct CombatRng {
    rng: Pcg32,
    seed: u64,
}

impl CombatRng {
    /// 使用指定种子创建RNG
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// 使用系统熵创建RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// 获取当前种子值
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// 重置RNG状态（使用当前种子）
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    /// 从列表中随机选择
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            let idx = self.random_range(0..items.len());
            Some(&items[idx])
        }
    }

    /// 生成指定范围内的随机值
    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: uniform::SampleUniform,
        R: uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

// 序列化时只保存种子
impl Serialize for CombatRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.seed)
    }
}

impl<'de> Deserialize<'de> for CombatRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(Self::new(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_rng() {
        let mut rng1 = CombatRng::new(123);
        let mut rng2 = CombatRng::new(123);

        // 相同种子应产生相同序列
        assert_eq!(rng1.random_range(0..100), rng2.random_range(0..100));
        assert_eq!(rng1.random_range(1..=6u32), rng2.random_range(1..=6u32));

        // 重置后应恢复相同序列
        let first = {
            rng1.reset();
            rng1.random_range(0..1000)
        };
        rng1.reset();
        assert_eq!(rng1.random_range(0..1000), first);
    }

    #[test]
    fn test_choose_empty() {
        let mut rng = CombatRng::new(7);
        let empty: [u32; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[42]), Some(&42));
    }

    #[test]
    fn test_serialize_keeps_seed() {
        let rng = CombatRng::new(99);
        let json = serde_json::to_string(&rng).unwrap();
        assert_eq!(json, "99");
        let restored: CombatRng = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.seed(), 99);
    }
}

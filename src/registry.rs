use std::borrow::Cow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::{
    consts::PROJECT_NAME,
    error::{ Error, Result },
    headers::{
        category::{ CATEGORY_COUNT, Category },
        descriptor::{ HeaderDescriptor, canonical_key },
        names::{ SEED, SeedEntry },
        validate::validate_seed,
    },
};

/// 同一 canonical key 出现多次时的处理方式
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The later row replaces the earlier one in the name index.
    #[default]
    KeepLast,
    KeepFirst,
}

/// Collects seed rows and builds an immutable [`Registry`].
///
/// Shadowed rows leave the name index but stay listed under their own
/// category either way.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    rows: Vec<SeedEntry>,
    policy: DuplicatePolicy,
    strict: bool,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置编译期种子表
    pub fn seeded() -> Self {
        Self::new().entries(SEED.iter().copied())
    }

    pub fn policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Reject defective rows instead of logging and skipping them.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn entry(
        mut self,
        wire_name: &'static str,
        category: Category,
        description: &'static str
    ) -> Self {
        self.rows.push((wire_name, category, description));
        self
    }

    pub fn entries<I>(mut self, rows: I) -> Self where I: IntoIterator<Item = SeedEntry> {
        self.rows.extend(rows);
        self
    }

    pub fn build(self) -> Result<Registry> {
        if self.strict {
            validate_seed(&self.rows).map_err(Error::MalformedSeed)?;
        }
        Ok(self.build_lenient())
    }

    /// 不会失败：问题行记录 warn 日志，空名行跳过
    fn build_lenient(self) -> Registry {
        if let Err(defects) = validate_seed(&self.rows) {
            for defect in &defects {
                tracing::warn!("header seed defect: {}", defect);
            }
        }

        let mut entries: Vec<HeaderDescriptor> = Vec::with_capacity(self.rows.len());
        let mut index: HashMap<Cow<'static, str>, usize> = HashMap::with_capacity(self.rows.len());
        let mut by_category: Vec<Vec<usize>> = vec![Vec::new(); CATEGORY_COUNT];

        for (wire_name, category, description) in self.rows {
            if wire_name.trim().is_empty() {
                continue;
            }

            let descriptor = HeaderDescriptor::new(wire_name, category, description);
            let slot = entries.len();
            by_category[category.index()].push(slot);

            match index.entry(descriptor.canonical_key.clone()) {
                Entry::Vacant(v) => {
                    v.insert(slot);
                }
                Entry::Occupied(mut o) => {
                    let prev = &entries[*o.get()];
                    match self.policy {
                        DuplicatePolicy::KeepLast => {
                            tracing::debug!(
                                "header {:?}: {} shadows {}",
                                descriptor.key(),
                                category,
                                prev.category
                            );
                            o.insert(slot);
                        }
                        DuplicatePolicy::KeepFirst => {
                            tracing::debug!(
                                "header {:?}: {} kept over {}",
                                descriptor.key(),
                                prev.category,
                                category
                            );
                        }
                    }
                }
            }

            entries.push(descriptor);
        }

        Registry {
            entries,
            index,
            by_category,
        }
    }
}

/// Read-only header registry.
#[derive(Debug)]
pub struct Registry {
    /// 种子顺序，包括被覆盖的行
    entries: Vec<HeaderDescriptor>,
    index: HashMap<Cow<'static, str>, usize>,
    by_category: Vec<Vec<usize>>,
}

impl Registry {
    /// Builds a private copy of the compiled-in table. Most callers want
    /// [`global`] instead.
    pub fn seeded() -> Self {
        RegistryBuilder::seeded().build_lenient()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    pub fn lookup(&self, name: &str) -> Result<&HeaderDescriptor> {
        self.get(name).ok_or_else(|| Error::NotFound(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&HeaderDescriptor> {
        let key = canonical_key(name);
        self.index.get(&*key).map(|&slot| &self.entries[slot])
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// 某分类下的全部条目，种子顺序
    pub fn list_category(&self, category: Category) -> impl Iterator<Item = &HeaderDescriptor> + '_ {
        self.by_category[category.index()].iter().map(move |&slot| &self.entries[slot])
    }

    /// Every seeded row, category-major in [`Category::ALL`] order.
    pub fn list_all(&self) -> impl Iterator<Item = &HeaderDescriptor> + '_ {
        Category::ALL.into_iter().flat_map(move |category| self.list_category(category))
    }

    /// Every category seeding a header with this name.
    pub fn categories_of(&self, name: &str) -> Vec<Category> {
        let key = canonical_key(name);
        Category::ALL
            .into_iter()
            .filter(|&c| self.list_category(c).any(|d| d.key() == &*key))
            .collect()
    }

    /// Number of distinct canonical keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

lazy_static::lazy_static! {
    static ref REGISTRY: Registry = {
        let registry = Registry::seeded();
        tracing::info!(
            "{}: header registry ready, {} rows, {} names",
            PROJECT_NAME,
            registry.entries.len(),
            registry.len()
        );
        registry
    };
}

/// 全局 registry，首次访问时构建
pub fn global() -> &'static Registry {
    &REGISTRY
}

/// Forces the one-time build now rather than on first lookup.
pub fn init() {
    lazy_static::initialize(&REGISTRY);
}

pub fn lookup(name: &str) -> Result<&'static HeaderDescriptor> {
    global().lookup(name)
}

pub fn get(name: &str) -> Option<&'static HeaderDescriptor> {
    global().get(name)
}

pub fn is_known(name: &str) -> bool {
    global().is_known(name)
}

pub fn list_category(category: Category) -> impl Iterator<Item = &'static HeaderDescriptor> {
    global().list_category(category)
}

pub fn list_all() -> impl Iterator<Item = &'static HeaderDescriptor> {
    global().list_all()
}

pub fn categories_of(name: &str) -> Vec<Category> {
    global().categories_of(name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::headers::names::{ authentication, body_information, message_body_information };

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_round_trip_every_descriptor() {
        let registry = global();
        for d in registry.list_all() {
            let found = registry.lookup(d.wire_name).expect(d.wire_name);
            assert_eq!(found.canonical_key, d.canonical_key);
        }

        // 未被覆盖的条目查回自身
        let winners: HashSet<*const HeaderDescriptor> = registry
            .index
            .values()
            .map(|&slot| &registry.entries[slot] as *const HeaderDescriptor)
            .collect();
        for d in registry.list_all() {
            if !winners.contains(&(d as *const HeaderDescriptor)) {
                continue;
            }
            assert_eq!(registry.lookup(d.wire_name).ok(), Some(d));
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() -> anyhow::Result<()> {
        let a = lookup("Content-Type")?;
        let b = lookup("content-type")?;
        let c = lookup("CONTENT-TYPE")?;
        let d = lookup("  content-type\t")?;
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(c, d);
        Ok(())
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(lookup("x-not-a-real-header"), Err(Error::NotFound("x-not-a-real-header".to_string())));
        assert!(!is_known("x-not-a-real-header"));
        assert!(!is_known(""));
        assert!(get("   ").is_none());
    }

    #[test]
    fn test_authorization() -> anyhow::Result<()> {
        let d = lookup("Authorization")?;
        assert_eq!(d.category, Category::Authentication);
        assert_eq!(d.wire_name, authentication::AUTHORIZATION);
        assert!(!d.description.is_empty());
        assert!(is_known("authorization"));
        Ok(())
    }

    #[test]
    fn test_list_category_only_yields_category() {
        for c in Category::ALL {
            let first: Vec<_> = list_category(c).collect();
            let second: Vec<_> = list_category(c).collect();
            assert_eq!(first, second, "{} 顺序不稳定", c);
            assert!(first.iter().all(|d| d.category == c));
        }
    }

    #[test]
    fn test_websockets() {
        let names: Vec<&str> = list_category(Category::Websockets).map(|d| d.wire_name).collect();
        assert_eq!(
            names,
            vec![
                "sec-websocket-key",
                "sec-websocket-extensions",
                "sec-websocket-accept",
                "sec-websocket-protocol",
                "sec-websocket-version"
            ]
        );
        for name in &names {
            assert_eq!(categories_of(name), vec![Category::Websockets]);
        }
    }

    #[test]
    fn test_list_all_is_every_category_concatenated() {
        let all: Vec<_> = list_all().collect();
        let concatenated: Vec<_> = Category::ALL.iter().flat_map(|&c| list_category(c)).collect();
        assert_eq!(all, concatenated);
        assert_eq!(all.len(), SEED.len());
        assert_eq!(list_all().count(), all.len());
    }

    #[test]
    fn test_one_descriptor_per_key() {
        let registry = global();
        let keys: HashSet<&str> = registry.list_all().map(|d| d.key()).collect();
        assert_eq!(registry.len(), keys.len());
        assert_eq!(registry.len(), 107);
        for key in keys {
            let upper = key.to_ascii_uppercase();
            assert_eq!(registry.lookup(key).ok(), registry.lookup(&upper).ok());
        }
    }

    #[test]
    fn test_content_length_keeps_last() -> anyhow::Result<()> {
        let d = lookup("content-length")?;
        assert_eq!(d.category, Category::MessageBodyInformation);
        assert_eq!(d.wire_name, message_body_information::CONTENT_LENGTH);

        let body: Vec<_> = list_category(Category::BodyInformation)
            .filter(|d| d.key() == "content-length")
            .collect();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].wire_name, body_information::CONTENT_LENGTH);

        let message: Vec<_> = list_category(Category::MessageBodyInformation)
            .filter(|d| d.key() == "content-length")
            .collect();
        assert_eq!(message.len(), 1);

        assert_eq!(
            categories_of("Content-Length"),
            vec![Category::BodyInformation, Category::MessageBodyInformation]
        );
        Ok(())
    }

    #[test]
    fn test_keep_first_policy() -> anyhow::Result<()> {
        init_tracing();
        let registry = RegistryBuilder::seeded().policy(DuplicatePolicy::KeepFirst).build()?;
        let d = registry.lookup("CONTENT-LENGTH")?;
        assert_eq!(d.category, Category::BodyInformation);
        assert_eq!(d.wire_name, "content-length");
        assert_eq!(registry.list_all().count(), SEED.len());
        Ok(())
    }

    #[test]
    fn test_strict_build_accepts_compiled_seed() -> anyhow::Result<()> {
        let registry = RegistryBuilder::seeded().strict(true).build()?;
        assert_eq!(registry.len(), global().len());
        Ok(())
    }

    #[test]
    fn test_strict_build_rejects_conflict() {
        let result = Registry::builder()
            .strict(true)
            .entry("etag", Category::Conditionals, "version")
            .entry("ETag", Category::Caching, "something else")
            .build();
        match result {
            Err(Error::MalformedSeed(defects)) => assert_eq!(defects.len(), 1),
            other => panic!("应该失败: {:?}", other),
        }
    }

    #[test]
    fn test_lenient_build_skips_empty_names() -> anyhow::Result<()> {
        init_tracing();
        let registry = Registry::builder()
            .entry("", Category::Other, "")
            .entry("x-custom", Category::Other, "custom")
            .build()?;
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.list_all().count(), 1);
        assert!(registry.is_known("X-Custom"));
        assert_eq!(registry.list_category(Category::Cors).count(), 0);
        Ok(())
    }

    #[test]
    fn test_empty_registry() -> anyhow::Result<()> {
        let registry = Registry::builder().build()?;
        assert!(registry.is_empty());
        assert_eq!(registry.list_all().count(), 0);
        assert!(registry.lookup("accept").is_err());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_first_access() -> anyhow::Result<()> {
        let mut tasks = Vec::new();
        for i in 0..16 {
            tasks.push(
                tokio::spawn(async move {
                    if i % 2 == 0 {
                        init();
                    }
                    let registry = global();
                    (registry as *const Registry as usize, registry.len())
                })
            );
        }

        let mut seen = HashSet::new();
        for task in tasks {
            let (addr, len) = task.await?;
            assert_eq!(len, 107);
            seen.insert(addr);
        }
        assert_eq!(seen.len(), 1, "应该只构建一次");
        Ok(())
    }
}

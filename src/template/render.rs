// 占位符替换

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*(\S+)\s*\}\}").expect("placeholder pattern is valid")
});

/// 按键查找替换值
pub trait TemplateValues {
    fn lookup(&self, key: &str) -> Option<&str>;
}

impl<S: BuildHasher> TemplateValues for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<S: BuildHasher> TemplateValues for HashMap<&str, &str, S> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).copied()
    }
}

impl TemplateValues for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl TemplateValues for BTreeMap<&str, &str> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).copied()
    }
}

/// 替换 `pattern` 中的全部占位符
///
/// 找不到的键替换为空文本，占位符之外的内容原样保留。
///
/// ```
/// use std::collections::HashMap;
/// use chunker::template::render;
///
/// let values = HashMap::from([("name", "Vasya")]);
/// assert_eq!(render("Hello {{ name }}!", &values), "Hello Vasya!");
/// ```
pub fn render<M>(pattern: &str, values: &M) -> String
where
    M: TemplateValues + ?Sized,
{
    PLACEHOLDER
        .replace_all(pattern, |caps: &Captures<'_>| {
            values.lookup(&caps[1]).unwrap_or_default().to_string()
        })
        .into_owned()
}

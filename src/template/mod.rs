// Template - 模板替换
//
// 职责：把字符串中的 {{ key }} 占位符替换为映射表中的值，
//       与分块核心无关

mod render;

pub use render::{render, TemplateValues};

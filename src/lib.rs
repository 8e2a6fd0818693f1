// chunker - 零拷贝分块视图
//
// Copyright (c) 2025 zedit team
//
// Licensed under MIT License

pub mod core;
pub mod io;
pub mod template;

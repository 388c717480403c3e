// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 函数弃用标记模块
//!
//! 该模块提供一个高阶包装器，用于把某个函数标记为已弃用：
//! 被包装的函数每次调用都会通过 `log` 门面发出一条 `warn` 级别的警告，
//! 其余行为（参数、返回值）与原函数完全一致。
//!
//! ## 设计意图
//! - **专属 target**：警告统一使用 [`DEPRECATION_TARGET`]，与普通日志区分开，
//!   默认日志配置不会把它过滤掉。
//! - **调用点归因**：警告记录携带的是调用方的源文件与行号
//!   （通过 `#[track_caller]` 捕获），而不是本模块自身的位置。
//! - **零侵入**：返回值原样透传，除发出警告外没有任何副作用。

use std::panic::Location;

use log::{log_enabled, Level, Record};

use crate::param::DEPRECATION_TARGET;

/// 弃用标记。由 [`deprecated`] 创建，持有给调用者的迁移指引文本，
/// 可复用于包装任意多个函数。
#[derive(Debug, Clone)]
pub struct DeprecationMarker {
    instructions: String,
}

/// 创建一个弃用标记。
///
/// `instructions` 是给调用者的迁移指引（例如 `"Please use add_route(...) instead."`），
/// 会原样出现在每条警告的末尾。
pub fn deprecated(instructions: impl Into<String>) -> DeprecationMarker {
    DeprecationMarker {
        instructions: instructions.into(),
    }
}

impl DeprecationMarker {
    /// 用该标记包装一个函数。
    ///
    /// Rust 没有运行期的函数名反射，因此需要显式传入 `name`。
    /// 多参数函数以元组为参数包装成闭包，无参函数使用 `()`。
    pub fn wrap<F>(&self, name: impl Into<String>, func: F) -> Deprecated<F> {
        Deprecated {
            name: name.into(),
            instructions: self.instructions.clone(),
            func,
        }
    }
}

/// 被标记为弃用的函数包装体。
#[derive(Debug, Clone)]
pub struct Deprecated<F> {
    name: String,
    instructions: String,
    func: F,
}

impl<F> Deprecated<F> {
    /// 调用被包装的函数，同时发出一条弃用警告。
    ///
    /// 警告的 target 为 [`DEPRECATION_TARGET`]，级别为 `warn`，
    /// 源文件与行号字段指向调用点；每次调用恰好发出一条，返回值原样透传。
    #[track_caller]
    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        let caller = Location::caller();
        if log_enabled!(target: DEPRECATION_TARGET, Level::Warn) {
            log::logger().log(
                &Record::builder()
                    .level(Level::Warn)
                    .target(DEPRECATION_TARGET)
                    .file(Some(caller.file()))
                    .line(Some(caller.line()))
                    .args(format_args!(
                        "Call to deprecated function {}(...). {}",
                        self.name, self.instructions
                    ))
                    .build(),
            );
        }
        (self.func)(args)
    }

    /// 丢弃包装，取回原函数。
    pub fn into_inner(self) -> F {
        self.func
    }
}

// --- Getter 访问器实现 ---

impl<F> Deprecated<F> {
    /// 获取被包装函数的名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 获取迁移指引文本
    pub fn instructions(&self) -> &str {
        &self.instructions
    }
}

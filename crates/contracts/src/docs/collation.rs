//! Сравнение строк "как в браузере" (`localeCompare`).
//!
//! Используется корневая (und) локаль ICU со стандартными настройками:
//! буквы с диакритикой стоят рядом с базовой буквой, строчные раньше
//! заглавных. Строки, равные для ICU, дополнительно сравниваются по
//! code point'ам, чтобы порядок был полным.

use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

thread_local! {
    static ROOT_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

pub fn locale_compare(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}

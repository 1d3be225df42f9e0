//! 対応動物の定義
//!
//! 動物は自由文字列ではなく閉じた列挙型で扱い、外部表記との対応は
//! `ANIMAL_NAMES` の対応表で一元管理する。

use crate::error::RequestError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 対応している動物
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Animal {
    Alpaca,
    Bird,
    Cat,
    Cattle,
    Chicken,
    Dog,
    Donkey,
    Duck,
    Ferret,
    Goat,
    GuineaPig,
    Hamster,
    Horse,
    Llama,
    Pig,
    Rabbit,
    Rat,
    Sheep,
    Tortoise,
}

/// 動物 ⇔ 外部表記の対応表
pub const ANIMAL_NAMES: &[(Animal, &str)] = &[
    (Animal::Alpaca, "Alpaca"),
    (Animal::Bird, "Bird"),
    (Animal::Cat, "Cat"),
    (Animal::Cattle, "Cattle"),
    (Animal::Chicken, "Chicken"),
    (Animal::Dog, "Dog"),
    (Animal::Donkey, "Donkey"),
    (Animal::Duck, "Duck"),
    (Animal::Ferret, "Ferret"),
    (Animal::Goat, "Goat"),
    (Animal::GuineaPig, "GuineaPig"),
    (Animal::Hamster, "Hamster"),
    (Animal::Horse, "Horse"),
    (Animal::Llama, "Llama"),
    (Animal::Pig, "Pig"),
    (Animal::Rabbit, "Rabbit"),
    (Animal::Rat, "Rat"),
    (Animal::Sheep, "Sheep"),
    (Animal::Tortoise, "Tortoise"),
];

impl Animal {
    /// 外部表記名
    pub fn name(&self) -> &'static str {
        ANIMAL_NAMES
            .iter()
            .find(|(animal, _)| animal == self)
            .map(|(_, name)| *name)
            .unwrap_or("Unknown")
    }

    /// 対応動物の一覧（対応表の順）
    pub fn all() -> impl Iterator<Item = Animal> {
        ANIMAL_NAMES.iter().map(|(animal, _)| *animal)
    }

    /// 外部表記から変換（前後空白除去・大文字小文字無視）
    pub fn from_name(name: &str) -> Option<Animal> {
        let name = name.trim();
        ANIMAL_NAMES
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(animal, _)| *animal)
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Animal {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Animal::from_name(s).ok_or_else(|| RequestError::AnimalNotSupported(s.to_string()))
    }
}

impl TryFrom<String> for Animal {
    type Error = RequestError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Animal> for &'static str {
    fn from(animal: Animal) -> Self {
        animal.name()
    }
}

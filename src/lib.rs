// Copyright @yucwang 2026

#![allow(dead_code)]

pub extern crate nalgebra as na;

pub mod core;
pub mod integrators;
pub mod io;
pub mod materials;
pub mod math;
pub mod renderers;
pub mod sensors;
pub mod shapes;

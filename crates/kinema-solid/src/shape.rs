// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Mass shapes with closed-form inertia tensors.
//!
//! A [`Shape`] is built once from geometric parameters and a density and is
//! immutable afterwards. Mass, inertia tensor and its inverse are computed at
//! construction; the inverse is cached because every integration step needs
//! it.

use kinema_math::{Matrix3, Scalar};
use tracing::{debug, warn};

use crate::error::ShapeError;

/// How a shape participates in a larger simulation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Nature {
    /// Extended body that can hold particles.
    Container,
    /// Point-like body.
    Particle,
    /// Acts as both container and particle.
    Both,
    /// Not classified.
    Unknown,
}

/// Geometric primitive kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Form {
    /// Solid ball.
    Sphere,
    /// Rectangular box.
    Rectangle,
    /// Flat cylinder.
    Disk,
    /// Cone (tag only; no inertia model).
    Cone,
    /// Pipe elbow (tag only; no inertia model).
    Elbow,
    /// Not classified.
    Unknown,
}

/// Solid ball of uniform density.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sphere<S = f64> {
    radius: S,
    density: S,
    volume: S,
}

impl<S: Scalar> Sphere<S> {
    /// Radius.
    pub fn radius(&self) -> S {
        self.radius
    }

    /// Density.
    pub fn density(&self) -> S {
        self.density
    }

    /// Volume `4/3·π·r³`.
    pub fn volume(&self) -> S {
        self.volume
    }
}

/// Flat cylinder whose symmetry axis is local Z.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Disk<S = f64> {
    radius: S,
    thickness: S,
    density: S,
    volume: S,
}

impl<S: Scalar> Disk<S> {
    /// Radius.
    pub fn radius(&self) -> S {
        self.radius
    }

    /// Thickness along local Z.
    pub fn thickness(&self) -> S {
        self.thickness
    }

    /// Density.
    pub fn density(&self) -> S {
        self.density
    }

    /// Volume `π·r²·t`.
    pub fn volume(&self) -> S {
        self.volume
    }
}

/// Rectangular box with edges along the local axes (length on X, width on
/// Y, thickness on Z).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle<S = f64> {
    length: S,
    width: S,
    thickness: S,
    density: S,
    volume: S,
}

impl<S: Scalar> Rectangle<S> {
    /// Edge length along local X.
    pub fn length(&self) -> S {
        self.length
    }

    /// Edge length along local Y.
    pub fn width(&self) -> S {
        self.width
    }

    /// Edge length along local Z.
    pub fn thickness(&self) -> S {
        self.thickness
    }

    /// Density.
    pub fn density(&self) -> S {
        self.density
    }

    /// Volume `l·w·t`.
    pub fn volume(&self) -> S {
        self.volume
    }
}

/// Geometric parameters of a shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Primitive<S = f64> {
    /// See [`Sphere`].
    Sphere(Sphere<S>),
    /// See [`Disk`].
    Disk(Disk<S>),
    /// See [`Rectangle`].
    Rectangle(Rectangle<S>),
    /// Mass and inertia given directly, no geometry.
    Custom,
}

/// Mass distribution owned by a [`crate::Solid`].
///
/// Deliberately not `Clone`: a shape belongs to exactly one solid.
#[derive(Debug)]
pub struct Shape<S = f64> {
    primitive: Primitive<S>,
    nature: Nature,
    form: Form,
    mass: S,
    inertia: Matrix3<S>,
    inverted_inertia: Matrix3<S>,
}

impl<S: Scalar> Shape<S> {
    /// Solid ball: inertia `2/5·m·r²` about every axis.
    ///
    /// # Errors
    /// [`ShapeError::Inertia`] when the tensor is singular (zero radius or
    /// zero density).
    pub fn sphere(radius: S, density: S) -> Result<Self, ShapeError> {
        let volume = S::from_f64(4.0 / 3.0) * S::pi() * radius * radius * radius;
        let mass = volume * density;
        let moment = S::from_f64(2.0 / 5.0) * mass * radius * radius;
        Self::build(
            Primitive::Sphere(Sphere {
                radius,
                density,
                volume,
            }),
            Nature::Particle,
            Form::Sphere,
            mass,
            Matrix3::diagonal(moment, moment, moment),
        )
    }

    /// Flat cylinder: `m·(r²/4 + t²/12)` about X and Y, `m/2·r²` about Z.
    ///
    /// # Errors
    /// [`ShapeError::Inertia`] when the tensor is singular.
    pub fn disk(radius: S, thickness: S, density: S) -> Result<Self, ShapeError> {
        let volume = radius * radius * S::pi() * thickness;
        let mass = volume * density;
        let four = S::from_f64(4.0);
        let twelve = S::from_f64(12.0);
        let two = S::from_f64(2.0);
        let transverse = mass * (radius * radius / four + thickness * thickness / twelve);
        let axial = mass / two * (radius * radius);
        Self::build(
            Primitive::Disk(Disk {
                radius,
                thickness,
                density,
                volume,
            }),
            Nature::Container,
            Form::Disk,
            mass,
            Matrix3::diagonal(transverse, transverse, axial),
        )
    }

    /// Rectangular box: `m/12·(w²+t²)`, `m/12·(l²+t²)`, `m/12·(l²+w²)`.
    ///
    /// # Errors
    /// [`ShapeError::Inertia`] when the tensor is singular.
    pub fn rectangle(length: S, width: S, thickness: S, density: S) -> Result<Self, ShapeError> {
        let volume = length * width * thickness;
        let mass = volume * density;
        let twelve = S::from_f64(12.0);
        let (l2, w2, t2) = (length * length, width * width, thickness * thickness);
        Self::build(
            Primitive::Rectangle(Rectangle {
                length,
                width,
                thickness,
                density,
                volume,
            }),
            Nature::Container,
            Form::Rectangle,
            mass,
            Matrix3::diagonal(
                mass / twelve * (w2 + t2),
                mass / twelve * (l2 + t2),
                mass / twelve * (l2 + w2),
            ),
        )
    }

    /// Shape with an explicit mass and inertia tensor.
    ///
    /// # Errors
    /// [`ShapeError::ZeroMass`] when `mass` is exactly zero;
    /// [`ShapeError::Inertia`] when `inertia` is singular.
    pub fn custom(
        mass: S,
        inertia: Matrix3<S>,
        nature: Nature,
        form: Form,
    ) -> Result<Self, ShapeError> {
        if mass == S::zero() {
            return Err(ShapeError::ZeroMass);
        }
        Self::build(Primitive::Custom, nature, form, mass, inertia)
    }

    fn build(
        primitive: Primitive<S>,
        nature: Nature,
        form: Form,
        mass: S,
        inertia: Matrix3<S>,
    ) -> Result<Self, ShapeError> {
        let inverted_inertia = inertia.inverse().map_err(|err| {
            warn!(?form, ?mass, %err, "shape inertia is not invertible");
            ShapeError::from(err)
        })?;
        debug!(?form, ?nature, ?mass, "shape built");
        Ok(Self {
            primitive,
            nature,
            form,
            mass,
            inertia,
            inverted_inertia,
        })
    }

    /// Geometric parameters.
    pub fn primitive(&self) -> &Primitive<S> {
        &self.primitive
    }

    /// Sphere parameters, when this shape is a sphere.
    pub fn as_sphere(&self) -> Option<&Sphere<S>> {
        match &self.primitive {
            Primitive::Sphere(s) => Some(s),
            _ => None,
        }
    }

    /// Disk parameters, when this shape is a disk.
    pub fn as_disk(&self) -> Option<&Disk<S>> {
        match &self.primitive {
            Primitive::Disk(d) => Some(d),
            _ => None,
        }
    }

    /// Box parameters, when this shape is a rectangle.
    pub fn as_rectangle(&self) -> Option<&Rectangle<S>> {
        match &self.primitive {
            Primitive::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    /// Volume of the primitive; `None` for custom shapes.
    pub fn volume(&self) -> Option<S> {
        match &self.primitive {
            Primitive::Sphere(s) => Some(s.volume()),
            Primitive::Disk(d) => Some(d.volume()),
            Primitive::Rectangle(r) => Some(r.volume()),
            Primitive::Custom => None,
        }
    }

    /// Nature tag.
    pub fn nature(&self) -> Nature {
        self.nature
    }

    /// Form tag.
    pub fn form(&self) -> Form {
        self.form
    }

    /// Mass.
    pub fn mass(&self) -> S {
        self.mass
    }

    /// Inertia tensor in body axes.
    pub fn inertia(&self) -> &Matrix3<S> {
        &self.inertia
    }

    /// Cached inverse of [`Shape::inertia`].
    pub fn inverted_inertia(&self) -> &Matrix3<S> {
        &self.inverted_inertia
    }
}

//! Interface reflection over a validated `naga` module.

use naga::valid::FunctionInfo;
use naga::{Binding, Handle, Module, Scalar, ScalarKind, Type, TypeInner};

/// User-defined stage input or output (`@location(n)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoSlot {
    pub name: Option<String>,
    pub location: u32,
}

/// Bind point of a uniform buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UniformBinding {
    pub group: u32,
    pub binding: u32,
}

/// Named uniform declared at module scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UniformVar {
    pub name: String,
    pub binding: UniformBinding,
    /// WGSL spelling of the type, e.g. `mat4x4<f32>`.
    pub ty: String,
}

/// Bound resource the entry point actually reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResourceUse {
    pub name: Option<String>,
    pub binding: UniformBinding,
    pub uniform: bool,
}

/// Interface of a single entry point.
#[derive(Debug, Clone, Default)]
pub(crate) struct Interface {
    pub inputs: Vec<IoSlot>,
    pub outputs: Vec<IoSlot>,
    pub uniforms: Vec<UniformVar>,
    pub resources: Vec<ResourceUse>,
}

pub(crate) fn entry_interface(
    module: &Module,
    entry: &naga::EntryPoint,
    info: &FunctionInfo,
) -> Interface {
    let mut iface = Interface::default();

    for arg in &entry.function.arguments {
        push_slots(module, arg.name.as_deref(), arg.ty, arg.binding.as_ref(), &mut iface.inputs);
    }
    if let Some(result) = &entry.function.result {
        push_slots(module, None, result.ty, result.binding.as_ref(), &mut iface.outputs);
    }

    for (handle, var) in module.global_variables.iter() {
        let Some(rb) = &var.binding else { continue };
        let binding = UniformBinding { group: rb.group, binding: rb.binding };
        let uniform = var.space == naga::AddressSpace::Uniform;

        if let (true, Some(name)) = (uniform, &var.name) {
            iface.uniforms.push(UniformVar {
                name: name.clone(),
                binding,
                ty: type_name(module, var.ty),
            });
        }
        if !info[handle].is_empty() {
            iface.resources.push(ResourceUse {
                name: var.name.clone(),
                binding,
                uniform,
            });
        }
    }

    iface
}

// Builtins are skipped; unbound struct types are flattened member by member.
fn push_slots(
    module: &Module,
    name: Option<&str>,
    ty: Handle<Type>,
    binding: Option<&Binding>,
    out: &mut Vec<IoSlot>,
) {
    match binding {
        Some(Binding::Location { location, .. }) => out.push(IoSlot {
            name: name.map(str::to_string),
            location: *location,
        }),
        Some(_) => {}
        None => {
            if let TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for m in members {
                    push_slots(module, m.name.as_deref(), m.ty, m.binding.as_ref(), out);
                }
            }
        }
    }
}

fn type_name(module: &Module, ty: Handle<Type>) -> String {
    let ty = &module.types[ty];
    match &ty.inner {
        TypeInner::Scalar(scalar) => scalar_name(*scalar),
        TypeInner::Vector { size, scalar } => {
            format!("vec{}<{}>", *size as u8, scalar_name(*scalar))
        }
        TypeInner::Matrix { columns, rows, scalar } => {
            format!("mat{}x{}<{}>", *columns as u8, *rows as u8, scalar_name(*scalar))
        }
        _ => ty.name.clone().unwrap_or_else(|| "composite".to_string()),
    }
}

fn scalar_name(scalar: Scalar) -> String {
    let prefix = match scalar.kind {
        ScalarKind::Float => "f",
        ScalarKind::Sint => "i",
        ScalarKind::Uint => "u",
        ScalarKind::Bool => return "bool".to_string(),
        ScalarKind::AbstractInt | ScalarKind::AbstractFloat => return "abstract".to_string(),
    };
    format!("{prefix}{}", u32::from(scalar.width) * 8)
}

//! Host storage attribute access.
//!
//! The classifier needs the DMAPI-inclusive attribute blob for an open
//! descriptor. [`AttrSource`] is the seam between the classifier and the
//! vendor call so tests can substitute in-memory blobs; [`GpfsAttrSource`]
//! is the production implementation over `gpfs_fgetattrs` from the GPFS
//! client library (only linked when the `gpfs` feature is enabled).

use crate::errors::{HsmError, HsmResult};
use std::os::unix::io::RawFd;

/// Capacity of the attribute buffer handed to the vendor call.
pub const ATTR_BUFFER_CAPACITY: usize = 1024;

/// Request DMAPI attributes in addition to the regular ones (gpfs.h).
pub const GPFS_ATTRFLAG_INCL_DMAPI: libc::c_int = 0x0008;

/// Provider of the raw attribute blob for an open file descriptor.
pub trait AttrSource {
    /// Fill `buf` with the DMAPI-inclusive attribute blob for `fd` and
    /// return the number of meaningful bytes written.
    fn fetch_attrs(&self, fd: RawFd, buf: &mut [u8]) -> HsmResult<usize>;
}

/// Attribute source backed by the native GPFS client library.
#[derive(Debug, Default, Clone, Copy)]
pub struct GpfsAttrSource;

#[cfg(feature = "gpfs")]
mod ffi {
    use libc::{c_int, c_void};

    #[link(name = "gpfs")]
    unsafe extern "C" {
        pub fn gpfs_fgetattrs(
            fd: c_int,
            flags: c_int,
            buffer: *mut c_void,
            buffer_size: c_int,
            attr_size: *mut c_int,
        ) -> c_int;
    }
}

/// Validate the attribute size reported by the vendor call against the
/// buffer it was asked to fill.
#[cfg_attr(not(feature = "gpfs"), allow(dead_code))]
fn checked_attr_size(reported: libc::c_int, capacity: usize) -> HsmResult<usize> {
    if reported < 0 {
        return Err(HsmError::AttributeFetch(format!(
            "vendor call reported negative attribute size {reported}"
        )));
    }
    let size = reported as usize;
    if size > capacity {
        return Err(HsmError::AttributeFetch(format!(
            "reported attribute size {size} exceeds buffer capacity {capacity}"
        )));
    }
    Ok(size)
}

impl AttrSource for GpfsAttrSource {
    #[cfg(feature = "gpfs")]
    fn fetch_attrs(&self, fd: RawFd, buf: &mut [u8]) -> HsmResult<usize> {
        let mut attr_size: libc::c_int = 0;
        let rc = unsafe {
            ffi::gpfs_fgetattrs(
                fd,
                GPFS_ATTRFLAG_INCL_DMAPI,
                buf.as_mut_ptr() as *mut libc::c_void,
                buf.len() as libc::c_int,
                &mut attr_size,
            )
        };
        if rc != 0 {
            let os_err = std::io::Error::last_os_error();
            return Err(HsmError::AttributeFetch(format!(
                "gpfs_fgetattrs failed with rc {rc}: {os_err}"
            )));
        }
        checked_attr_size(attr_size, buf.len())
    }

    #[cfg(not(feature = "gpfs"))]
    fn fetch_attrs(&self, _fd: RawFd, _buf: &mut [u8]) -> HsmResult<usize> {
        Err(HsmError::AttributeFetch(
            "GPFS support not compiled in (rebuild with the `gpfs` feature)".to_string(),
        ))
    }
}

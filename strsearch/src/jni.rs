// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::ptr;

use jni::{
    JNIEnv,
    errors::{Error, JniError},
    objects::{JByteArray, JClass},
    sys::{jint, jintArray, jsize},
};

#[unsafe(no_mangle)]
extern "system" fn Java_app_accrescent_strsearch_PatternMatcher_naiveSearch<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    text: JByteArray<'local>,
    pattern: JByteArray<'local>,
) -> jintArray {
    run(&mut env, &text, &pattern, |text, pattern| {
        crate::naive::search(text, pattern)
    })
}

#[unsafe(no_mangle)]
extern "system" fn Java_app_accrescent_strsearch_PatternMatcher_rabinKarpSearch<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    text: JByteArray<'local>,
    pattern: JByteArray<'local>,
) -> jintArray {
    run(&mut env, &text, &pattern, |text, pattern| {
        crate::rabin_karp::search(text, pattern)
    })
}

#[unsafe(no_mangle)]
extern "system" fn Java_app_accrescent_strsearch_PatternMatcher_kmpSearch<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    text: JByteArray<'local>,
    pattern: JByteArray<'local>,
) -> jintArray {
    run(&mut env, &text, &pattern, |text, pattern| {
        crate::kmp::search(text, pattern).into_matches()
    })
}

#[unsafe(no_mangle)]
extern "system" fn Java_app_accrescent_strsearch_PatternMatcher_boyerMooreSearch<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    text: JByteArray<'local>,
    pattern: JByteArray<'local>,
) -> jintArray {
    run(&mut env, &text, &pattern, |text, pattern| {
        crate::boyer_moore::search(text, pattern).into_matches()
    })
}

// Returns null if anything crosses the JNI boundary badly, since an empty array would be
// indistinguishable from "no matches"
fn run(
    env: &mut JNIEnv,
    text: &JByteArray,
    pattern: &JByteArray,
    search: impl FnOnce(&[u8], &[u8]) -> Vec<usize>,
) -> jintArray {
    let matches = match (read_bytes(env, text), read_bytes(env, pattern)) {
        (Ok(text), Ok(pattern)) => search(&text, &pattern),
        _ => return ptr::null_mut(),
    };

    write_ints(env, &matches).unwrap_or(ptr::null_mut())
}

fn read_bytes(env: &JNIEnv, array: &JByteArray) -> Result<Vec<u8>, Error> {
    let len = env.get_array_length(array)?;
    let mut buf = vec![0; usize::try_from(len).unwrap_or(0)];

    // Java bytes are signed, but the search compares raw byte values
    env.get_byte_array_region(array, 0, bytemuck::cast_slice_mut::<u8, i8>(&mut buf))?;

    Ok(buf)
}

fn write_ints(env: &mut JNIEnv, matches: &[usize]) -> Result<jintArray, Error> {
    // Offsets past jint::MAX cannot be stored in a Java int[]
    let matches = matches
        .iter()
        .map(|&i| jint::try_from(i))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| Error::JniCall(JniError::Unknown))?;
    let len = jsize::try_from(matches.len())
        .map_err(|_| Error::JniCall(JniError::Unknown))?;

    let array = env.new_int_array(len)?;
    env.set_int_array_region(&array, 0, &matches)?;

    Ok(array.into_raw())
}
